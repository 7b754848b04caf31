use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Tab for `.tsv`/`.tab` files, comma otherwise. A trailing `.gz` is
/// stripped before the extension is inspected.
pub fn delimiter_for_path(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") || name.ends_with(".tab") {
        b'\t'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_delimiter_selection() {
        assert_eq!(delimiter_for_path(&PathBuf::from("a.csv")), b',');
        assert_eq!(delimiter_for_path(&PathBuf::from("a.tsv")), b'\t');
        assert_eq!(delimiter_for_path(&PathBuf::from("a.TAB")), b'\t');
        assert_eq!(delimiter_for_path(&PathBuf::from("a.tsv.gz")), b'\t');
        assert_eq!(delimiter_for_path(&PathBuf::from("a.csv.gz")), b',');
        assert_eq!(delimiter_for_path(&PathBuf::from("scores")), b',');
    }

    #[test]
    fn test_open_gz_roundtrip() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::{Read, Write};

        let mut dir = std::env::temp_dir();
        dir.push(format!("panel_scout_gz_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("t.csv.gz");

        let file = File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(b"A,B\n1,2\n").unwrap();
        enc.finish().unwrap();

        let mut reader = open_maybe_gz(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "A,B\n1,2\n");
    }
}
