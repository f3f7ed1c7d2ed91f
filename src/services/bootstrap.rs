use std::fs;
use std::path::{Path, PathBuf};
use crate::services::dataset::DatasetError;

/// File name used when the configured location cannot be written
pub const FALLBACK_FILE_NAME: &str = "internship.csv";

/// Built-in sample listings written when no dataset is present
pub const SAMPLE_DATA: &str = r#"internship_title,company_name,location,start_date,duration,stipend
Java Development,SunbaseData,Work From Home,Immediately,6 Months,"₹ 30,000 /month"
Accounting and Finance,DAKSM & Co. LLP,Noida,Immediately,6 Months,"₹ 5,000-10,000 /month"
Sales & Digital Marketing,Bharat Natural Elements Private Limited,Bangalore,Immediately,6 Months,"₹ 5,000 /month"
Social Entrepreneurship,Hamari Pahchan NGO,Work From Home,Immediately,6 Months,Unpaid
Videography & Photography,Esquare Lifestyle,Bangalore,Immediately,6 Months,"₹ 12,000 /month"
English Curriculum Writing,Team Everest,Work From Home,Immediately,6 Months,Unpaid
Search Engine Optimization,Global Trend,Work From Home,Immediately,6 Months,"₹ 5,000 /month"
Digital Dreamweaver,Global Trend,Work From Home,Immediately,6 Months,"₹ 7,000 /month"
Graphic Design,Expedify,Work From Home,Immediately,6 Months,"₹ 10,000-15,000 /month"
Campus Ambassador,Internshala,Work From Home,Not specified,6 Months,"₹ 2000"
Customer Support,ClearTax,Bangalore,Immediately,6 Months,"₹ 30,000 /month"
Web Development,TechCorp,Mumbai,Immediately,6 Months,"₹ 25,000 /month"
Python Development,DevCorp,Work From Home,Immediately,6 Months,"₹ 35,000 /month"
UI/UX Design,DesignStudio,Pune,Immediately,6 Months,"₹ 20,000 /month"
Content Writing,MediaHouse,Work From Home,Immediately,6 Months,"₹ 15,000 /month"
"#;

/// Make sure a dataset file exists, writing the sample table if it does not
///
/// Tries the configured path first (creating its parent directory), then
/// `fallback_dir/internship.csv`. Returns the path that holds the dataset.
pub fn ensure_dataset(path: &Path, fallback_dir: &Path) -> Result<PathBuf, DatasetError> {
    if path.exists() {
        tracing::info!("Data file found at {}", path.display());
        return Ok(path.to_path_buf());
    }

    tracing::warn!("Data file not found at {}, creating sample data", path.display());

    match write_sample(path) {
        Ok(()) => {
            tracing::info!("Sample data file created at {}", path.display());
            Ok(path.to_path_buf())
        }
        Err(e) => {
            tracing::error!("Error creating sample data file: {}", e);

            let fallback = fallback_dir.join(FALLBACK_FILE_NAME);
            write_sample(&fallback).map_err(|e| {
                tracing::error!("Failed to create data file anywhere: {}", e);
                e
            })?;

            tracing::info!("Created data file in fallback location: {}", fallback.display());
            Ok(fallback)
        }
    }
}

fn write_sample(path: &Path) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, SAMPLE_DATA).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
