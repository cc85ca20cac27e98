use crate::manifest;
use indexmap::IndexMap;

/// Root folder everything is scaffolded under, resolved against the current
/// working directory.
pub const BASE_DIR: &str = "drug-consumption-dnn-prediction";

/// Subdirectories created below [`BASE_DIR`], in creation order.
pub const DIRECTORIES: [&str; 10] = [
    // data
    "data/raw",
    "data/processed",
    // notebooks
    "notebooks",
    // trained models
    "models",
    // results
    "results/figures/training_curves",
    "results/figures/comparison_plots",
    "results/figures/feature_importance",
    "results/metrics",
    "results/reports",
    // source code
    "src",
];

/// The kind of content a placeholder file is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// `{}`, an empty Jupyter notebook.
    Notebook,
    /// `# To be implemented\n`
    PythonStub,
    /// The generated `requirements.txt` manifest.
    Requirements,
    /// The generated `README.md`.
    Readme,
    /// `MIT License\n`
    License,
}

impl Seed {
    pub fn contents(self) -> &'static str {
        match self {
            Seed::Notebook => manifest::EMPTY_NOTEBOOK,
            Seed::PythonStub => manifest::PYTHON_STUB,
            Seed::Requirements => manifest::requirements_manifest(),
            Seed::Readme => manifest::readme(),
            Seed::License => manifest::LICENSE_TEXT,
        }
    }
}

/// Placeholder files created below [`BASE_DIR`], in creation order.
///
/// An [`IndexMap`] rather than a plain slice so lookups by path stay cheap in
/// tests while iteration order remains the creation order.
pub fn placeholder_files() -> IndexMap<&'static str, Seed> {
    IndexMap::from([
        ("notebooks/01_Data_Preparation.ipynb", Seed::Notebook),
        ("notebooks/02_DNN_Baseline.ipynb", Seed::Notebook),
        ("notebooks/03_Hyperparameter_Tuning.ipynb", Seed::Notebook),
        ("notebooks/04_Model_Evaluation.ipynb", Seed::Notebook),
        ("notebooks/05_RF_vs_DNN_Comparison.ipynb", Seed::Notebook),
        ("notebooks/06_Feature_Importance_DNN.ipynb", Seed::Notebook),
        ("src/model_builders.py", Seed::PythonStub),
        ("src/evaluation.py", Seed::PythonStub),
        ("src/visualization.py", Seed::PythonStub),
        ("requirements.txt", Seed::Requirements),
        ("README.md", Seed::Readme),
        ("LICENSE", Seed::License),
    ])
}
