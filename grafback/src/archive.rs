//! Optional post-backup archive step: pack the backup directory into a
//! timestamped zip file next to it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use chrono::Local;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Creates `<dir>-YYYYMMDDHHMMSS.zip` from the contents of `dir` and returns
/// the archive path. Entry names are prefixed with the directory name, so
/// extraction recreates the backup tree under a single folder.
pub fn archive_backup(dir: &Path) -> Result<PathBuf> {
    ensure!(dir.is_dir(), "backup directory {dir:?} does not exist");

    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let out = PathBuf::from(format!(
        "{}-{stamp}.zip",
        dir.to_string_lossy().trim_end_matches('/')
    ));
    let prefix = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = fs::File::create(&out).with_context(|| format!("cannot create archive {out:?}"))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in
            fs::read_dir(&current).with_context(|| format!("cannot read directory {current:?}"))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            let rel = path
                .strip_prefix(dir)
                .with_context(|| format!("archive file not under backup root: {path:?}"))?;
            let name = format!("{prefix}/{}", rel.to_string_lossy().replace('\\', "/"));
            zip.start_file(name, options)
                .with_context(|| format!("cannot add {path:?} to archive"))?;
            let mut src =
                fs::File::open(&path).with_context(|| format!("cannot open file {path:?}"))?;
            std::io::copy(&mut src, &mut zip)
                .with_context(|| format!("cannot write {path:?} to archive"))?;
        }
    }
    zip.finish().context("cannot finalize archive")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, fs, io::Read};

    use zip::ZipArchive;

    use super::archive_backup;

    #[test]
    fn archives_backup_tree() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().join("dashboards");
        fs::create_dir_all(root.join("Ops")).expect("mkdir");
        fs::write(root.join("Ops/abc.json"), b"{\"panels\": []}").expect("write");
        fs::write(root.join("top.json"), b"{}").expect("write");

        let out = archive_backup(&root).expect("archive");
        assert!(out.file_name().unwrap().to_string_lossy().ends_with(".zip"));

        let mut zip = ZipArchive::new(fs::File::open(&out).expect("open")).expect("read zip");
        let names: BTreeSet<String> = (0..zip.len())
            .map(|idx| zip.by_index(idx).expect("entry").name().to_string())
            .collect();
        assert!(names.contains("dashboards/Ops/abc.json"));
        assert!(names.contains("dashboards/top.json"));

        let mut body = String::new();
        zip.by_name("dashboards/Ops/abc.json")
            .expect("entry")
            .read_to_string(&mut body)
            .expect("read entry");
        assert_eq!(body, "{\"panels\": []}");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(archive_backup(&tmp.path().join("nope")).is_err());
    }
}
