use crate::models::error::EmuError;
use camino::Utf8Path;
use std::fs::{self, File};
use std::io::{self, Cursor, Read, Seek};

pub struct Decompression;

impl Decompression {
    /// Extracts an in-memory zip payload into `destination`. Returns the number of files written.
    pub fn extract_bytes(bytes: &[u8], destination: &Utf8Path) -> Result<usize, EmuError> {
        Self::extract(Cursor::new(bytes), destination)
    }

    pub fn extract<R: Read + Seek>(reader: R, destination: &Utf8Path) -> Result<usize, EmuError> {
        let mut archive = zip::ZipArchive::new(reader)?;
        fs::create_dir_all(destination)?;
        let mut written = 0;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;

            // enclosed_name() rejects absolute paths and `..` escapes
            let safe_path = match file.enclosed_name() {
                Some(path) => path.to_owned(),
                None => continue,
            };

            let output_path = destination.as_std_path().join(&safe_path);

            if file.is_dir() {
                fs::create_dir_all(&output_path)?;
                continue;
            }

            if let Some(parent) = output_path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }

            let mut outfile = File::create(&output_path)?;
            io::copy(&mut file, &mut outfile)?;
            written += 1;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    let _ = fs::set_permissions(&output_path, fs::Permissions::from_mode(mode));
                }
            }
        }

        Ok(written)
    }

    /// Number of entries in the archive at `path`.
    pub fn count_entries(path: &Utf8Path) -> Result<usize, EmuError> {
        let archive = zip::ZipArchive::new(File::open(path)?)?;
        Ok(archive.len())
    }

    /// Checks that `bytes` is a readable zip archive.
    pub fn validate(bytes: &[u8]) -> Result<usize, EmuError> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        Ok(archive.len())
    }
}
