//! Status command handler

use anyhow::Result;

use shelf_core::{Catalog, Config};

use crate::output::{Output, OutputFormat};

/// Show where the library lives and what is in it
pub fn show(catalog: &Catalog, config: &Config, output: &Output) -> Result<()> {
    let stats = catalog.storage_stats();
    let library = catalog.statistics();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "library_file": catalog.path(),
                    "data_dir": config.data_dir,
                    "storage": {
                        "exists": stats.exists,
                        "size": stats.size
                    },
                    "counts": {
                        "books": library.total,
                        "read": library.read
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", catalog.path().display());
        }
        OutputFormat::Human => {
            println!("Shelf Status");
            println!("============");
            println!();
            println!("Storage:");
            println!("  Library:  {}", catalog.path().display());
            if stats.exists {
                println!("  Size:     {}", stats.size_human());
            } else {
                println!("  Size:     (not created yet)");
            }
            println!("  Data dir: {}", config.data_dir.display());
            println!();
            println!("Contents:");
            println!("  Books: {}", library.total);
            println!("  Read:  {}", library.read);
        }
    }

    Ok(())
}
