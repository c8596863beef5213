//! Multi-level wrapping over file reads

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use faultline::chain::ChainWalker;
    use faultline::faults::wrapping::{
        load_user_config, process_user_data, read_config_file, user_config_path,
    };
    use faultline::system::{RealSystem, mock::MockSystem};
    use std::fs;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn missing_file_keeps_every_layer() {
        let system = MockSystem::new().with_dir("/users").unwrap();
        let err = process_user_data(&system, Path::new("/users"), 999).unwrap_err();

        let message = format!("{err:#}");
        for component in [
            "failed to process user",
            "999",
            "failed to load config for user",
            "failed to read config file",
            "user_999.json",
        ] {
            assert!(message.contains(component), "missing '{component}' in {message}");
        }

        let walker = ChainWalker::default();
        let root = walker.extract::<io::Error>(err.as_ref()).unwrap();
        assert_eq!(root.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn chain_is_at_least_three_deep_for_any_user() {
        let system = MockSystem::new();
        for user_id in [1, 42, 123, 500] {
            let err = process_user_data(&system, Path::new("/users"), user_id).unwrap_err();
            let texts = ChainWalker::new(10).render(err.as_ref()).unwrap();
            assert!(texts.len() >= 3, "user {user_id}: {texts:?}");
            assert!(texts[0].starts_with("failed to process user"));
            assert_eq!(
                texts.last().unwrap(),
                &format!("File not found: /users/user_{user_id}.json")
            );
        }
    }

    #[test]
    fn load_user_config_propagates_read_error() {
        let system = MockSystem::new();
        let err = load_user_config(&system, Path::new("/cfg"), 123).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("failed to load config for user 123"));
        assert!(message.contains("failed to read config file /cfg/user_123.json"));
    }

    #[test]
    fn existing_file_is_read() {
        let system = MockSystem::new()
            .with_file("/cfg/user_7.json", br#"{"name": "test"}"#)
            .unwrap();
        let content = process_user_data(&system, Path::new("/cfg"), 7).unwrap();
        assert_eq!(content, r#"{"name": "test"}"#);
    }

    #[test]
    fn reads_from_real_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let path = user_config_path(temp_dir.path(), 5);
        fs::write(&path, r#"{"value": 123}"#).unwrap();

        let system = RealSystem::new();
        assert_eq!(read_config_file(&system, &path).unwrap(), r#"{"value": 123}"#);

        let err = read_config_file(&system, &temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
        assert!(err.to_string().contains("nope.json"));
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
