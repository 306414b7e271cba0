mod licence_file_locator;
mod url_resolver;

pub use licence_file_locator::LicenceFileLocator;
pub use url_resolver::UrlResolver;
