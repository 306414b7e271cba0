/// Licence classification backends
mod text_classifier;

pub use text_classifier::TextLicenceClassifier;
