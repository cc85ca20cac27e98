use crate::plan::Plan;
use crate::scaffold::Report;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree from the plan entries, returning the root node.
fn build_tree(plan: &Plan, root_name: &str) -> Rc<RefCell<TreeNode>> {
    let root = Rc::new(RefCell::new(TreeNode::new(root_name.to_string(), false)));

    // map relative path to node
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in &plan.entries {
        ensure_node(&mut lookup, &entry.destination, entry.is_file);
    }

    root
}

/// Returns the node for `path`, creating it and any missing ancestor
/// directories along the way. Intermediate segments such as `data/` only
/// appear in the plan as prefixes of deeper entries, so they are
/// materialized here.
fn ensure_node(
    lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
    path: &Path,
    is_file: bool,
) -> Rc<RefCell<TreeNode>> {
    if let Some(node) = lookup.get(path) {
        return Rc::clone(node);
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let parent_node = ensure_node(lookup, parent, false);

    let name = path
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let node = Rc::new(RefCell::new(TreeNode::new(name, is_file)));

    parent_node.borrow_mut().children.push(Rc::clone(&node));
    lookup.insert(path.to_path_buf(), Rc::clone(&node));

    node
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix.yellow())
    } else {
        format!("{}│   ", prefix.yellow())
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

/// Prints the closing summary: how much was created, the scaffolded layout
/// as a tree, and the manual steps that come next.
pub fn print_summary(plan: &Plan, root: &Path, report: &Report) {
    let root_name = root
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let banner = format!(
        "\n{} {}\n",
        "┌─".bold().bright_blue(),
        "Project structure ready".bold().bright_blue(),
    );

    println!("{}", banner);

    let tree_root = build_tree(plan, &root_name);
    print_tree(&tree_root, "", true);

    println!(
        "\n{} {} directories and {} files created under {}/",
        "└─".bold().bright_blue(),
        report.created_directories(),
        report.created_files(),
        root_name,
    );

    println!("\n{}", "Next steps:".bold());
    println!("  1. Copy your dataset to: data/raw/");
    println!("  2. Install dependencies: pip install -r requirements.txt");
    println!("  3. Start with: notebooks/01_Data_Preparation.ipynb");
}
