use super::{error_context, generr, inerr, unkext, AbstPath, Error, ObjectType};

use serde::de::DeserializeOwned;

#[derive(Debug, PartialEq)]
enum Ext {
    Toml,
}
fn get_ext(path: &AbstPath) -> Option<Ext> {
    let name = path.file_name()?;
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "toml" => Some(Ext::Toml),
        _ => None,
    }
}

/// Load the data from a file, interpreting the content of the file based on the
/// extension of the file and deserializing the content to the generic type T
pub fn load<T: DeserializeOwned>(path: &AbstPath) -> Result<T, Error> {
    let errctx = error_context(format!("could not load file at path {}", path));
    if !path.exists() {
        return Err(generr(errctx("open file"), "file doesn't exist"));
    }
    if path.object_type() != Some(ObjectType::File) {
        return Err(generr(errctx("open file"), "object at path is not a file"));
    }

    match get_ext(path) {
        Some(Ext::Toml) => {
            let serialized = std::fs::read_to_string(path.to_path_buf())
                .map_err(inerr(errctx("read content to string")))?;
            toml::from_str(&serialized).map_err(inerr(errctx("deserialize content from toml")))
        }
        None => Err(unkext(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_ext, load, AbstPath, Ext};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestStruct {
        int: i64,
        string: String,
        list: Option<Vec<String>>,
    }

    #[test]
    fn ext() {
        assert_eq!(get_ext(&AbstPath::from("a/config.toml")), Some(Ext::Toml));
        assert_eq!(get_ext(&AbstPath::from("a/config.TOML")), Some(Ext::Toml));
        assert_eq!(get_ext(&AbstPath::from("a/config.bin")), None);
        assert_eq!(get_ext(&AbstPath::from("a/config")), None);
    }

    #[test]
    fn load_toml() {
        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());

        let path = root.add_last("test.toml");
        std::fs::write(path.to_path_buf(), "int = -3\nstring = \"some text\"\n").unwrap();
        let loaded: TestStruct = load(&path).unwrap();
        assert_eq!(
            loaded,
            TestStruct {
                int: -3,
                string: String::from("some text"),
                list: None
            }
        );

        let wrong = root.add_last("wrong.toml");
        std::fs::write(wrong.to_path_buf(), "int = \"not a number\"").unwrap();
        assert!(load::<TestStruct>(&wrong).is_err());

        let unknown = root.add_last("test.json");
        std::fs::write(unknown.to_path_buf(), "{}").unwrap();
        assert!(load::<TestStruct>(&unknown).is_err());

        assert!(load::<TestStruct>(&root.add_last("missing.toml")).is_err());
        assert!(load::<TestStruct>(&root).is_err());
    }
}
