use crate::error::{Result, WipError};
use crate::policy::Thresholds;
use crate::source::{SourceParams, WipSource};
use crate::source_fs::FsWipSource;

pub enum Backend {
    Fs,
    #[cfg(feature = "http")]
    Http,
}

pub fn open_source(backend: Backend, p: SourceParams) -> Result<Box<dyn WipSource>> {
    let thresholds = Thresholds::from_option(p.warning_ratio)?;
    match backend {
        Backend::Fs => {
            let path = p
                .file
                .ok_or_else(|| WipError::Config("file backend needs a dataset path".into()))?;
            Ok(Box::new(FsWipSource::open(&path, thresholds)?))
        }
        #[cfg(feature = "http")]
        Backend::Http => {
            let url = p
                .api_url
                .ok_or_else(|| WipError::Config("HTTP backend needs an API URL".into()))?;
            Ok(Box::new(crate::source_http::HttpWipSource::new(&url, p.token)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_warning_ratio_is_rejected_before_opening() {
        let params = SourceParams {
            file: Some("does-not-matter.json".into()),
            warning_ratio: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            open_source(Backend::Fs, params),
            Err(WipError::Config(_))
        ));
    }
}
