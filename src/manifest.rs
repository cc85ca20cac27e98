//! Fixed contents written into the seed files.
//!
//! Everything here is constant data. The two larger blocks are kept behind
//! functions so callers read as "generate the manifest" rather than reaching
//! into a wall of text.

/// Written into `LICENSE`.
pub const LICENSE_TEXT: &str = "MIT License\n";

/// Written into every `src/*.py` stub.
pub const PYTHON_STUB: &str = "# To be implemented\n";

/// An empty Jupyter notebook, written into every `notebooks/*.ipynb` seed.
pub const EMPTY_NOTEBOOK: &str = "{}";

/// Returns the `requirements.txt` manifest: pinned minimum versions, grouped
/// under comment headers by concern.
pub fn requirements_manifest() -> &'static str {
    r#"# Deep Learning Framework
tensorflow>=2.13.0
keras>=2.13.0

# Machine Learning
scikit-learn>=1.3.0
imbalanced-learn>=0.11.0

# Data Processing
pandas>=2.0.0
numpy>=1.24.0

# Visualization
matplotlib>=3.7.0
seaborn>=0.12.0
plotly>=5.14.0

# Model Interpretation
shap>=0.42.0

# Hyperparameter Tuning
keras-tuner>=1.3.0

# Utilities
joblib>=1.3.0
tqdm>=4.65.0

# Jupyter
jupyter>=1.0.0
ipykernel>=6.25.0
"#
}

/// Returns the generated `README.md`: project description, research
/// objectives, dataset notes, quick start, and the Random Forest baseline
/// figures the DNN study compares against.
pub fn readme() -> &'static str {
    r#"# Prediksi Risiko Konsumsi Narkoba Menggunakan Deep Neural Network

**Studi Lanjutan dari Random Forest Model**

## 📌 Deskripsi Project

Penelitian ini mengembangkan model Deep Neural Network (DNN) untuk memprediksi risiko konsumsi narkoba berdasarkan personality traits, sebagai studi lanjutan dari model Random Forest (UTS).

**Peneliti:**
- Muhammad Ichsan Junaedi (241572010024)
- Amanda Wijayanti (241572010006)

**Dosen Pengampu:** Hendri Kharisma S.Kom, M.T

**Institusi:** STMIK TAZKIA

## 🎯 Tujuan Penelitian

1. Implementasi Deep Neural Network untuk binary classification (user vs non-user)
2. Optimasi arsitektur DNN melalui hyperparameter tuning
3. Perbandingan komprehensif DNN vs Random Forest
4. Analisis feature importance menggunakan SHAP

## 📊 Dataset

**Sumber:** UCI Machine Learning Repository - Drug Consumption (Quantified)
- **URL:** https://archive.ics.uci.edu/dataset/373/drug+consumption+quantified
- **Samples:** 1,885 responden
- **Features:** 24 fitur (demografi, personality traits, behavioral measures)
- **Target:** Binary (User vs Non-User)

## 🚀 Quick Start

### 1. Clone Repository
```bash
git clone <repository-url>
cd drug-consumption-dnn-prediction
```

### 2. Install Dependencies
```bash
pip install -r requirements.txt
```

### 3. Download Dataset
Download dataset dari UCI dan letakkan di `data/raw/`

### 4. Run Notebooks
Jalankan notebooks secara berurutan:
1. `01_Data_Preparation.ipynb` (dari UTS)
2. `02_DNN_Baseline.ipynb`
3. `03_Hyperparameter_Tuning.ipynb`
4. `04_Model_Evaluation.ipynb`
5. `05_RF_vs_DNN_Comparison.ipynb`
6. `06_Feature_Importance_DNN.ipynb`

## 📁 Struktur Project

```
drug-consumption-dnn-prediction/
├── data/                      # Dataset
├── notebooks/                 # Jupyter notebooks
├── models/                    # Trained models
├── results/                   # Results & visualizations
├── src/                       # Source code
├── requirements.txt           # Dependencies
└── README.md                  # This file
```

## 📈 Baseline Performance (Random Forest - UTS)

- **Accuracy:** 86.21%
- **ROC-AUC:** 0.9347
- **F1-Score:** 88.74%
- **Overfitting Gap:** 0.86%

## 📝 License

MIT License

## 📧 Contact

- Muhammad Ichsan Junaedi: 2415720100024.ichsan@student.stmik.tazkia.ac.id
- Amanda Wijayanti: 241572010006.amanda@student.stmik.tazkia.ac.id
"#
}
