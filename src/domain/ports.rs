use crate::utils::error::Result;

/// Where catalog files are read from.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    /// Catalog to load before the menu is shown, if any.
    fn catalog_file(&self) -> Option<&str>;
    fn base_dir(&self) -> &str;
}
