use crate::licence_detection::domain::{DependencyInfo, DependencyList};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::DetectorError;
use crate::shared::security::read_text_file;
use crate::shared::Result;

const SEPARATOR: &str =
    "================================================================================\n";

/// NoticeFormatter adapter for NOTICE files shipped alongside a binary
///
/// Each dependency is listed with its licence and the verbatim text of
/// the licence file it was classified from.
pub struct NoticeFormatter {
    product_name: String,
}

impl NoticeFormatter {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }

    fn render_dependency(&self, output: &mut String, dep: &DependencyInfo) -> Result<()> {
        output.push_str(SEPARATOR);
        output.push_str(&format!("Module  : {}\n", dep.name));
        output.push_str(&format!("Version : {}\n", dep.version));
        if !dep.version_time.is_empty() {
            output.push_str(&format!("Time    : {}\n", dep.version_time));
        }
        output.push_str(&format!("Licence : {}\n", dep.licence_type));
        output.push_str(&format!("URL     : {}\n\n", dep.url));

        match &dep.licence_file {
            Some(path) => {
                let text = read_text_file(path, "licence file").map_err(|e| {
                    DetectorError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    }
                })?;
                output.push_str(text.trim_end());
                output.push('\n');
            }
            None => output.push_str("No licence text available.\n"),
        }
        output.push('\n');
        Ok(())
    }
}

impl Default for NoticeFormatter {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl ReportFormatter for NoticeFormatter {
    fn format(&self, dependencies: &DependencyList) -> Result<String> {
        let mut output = format!(
            "{}\nThird-party software notices and information\n\n\
             This product includes software developed by third parties.\n\
             The licences of those components are reproduced below.\n\n",
            self.product_name
        );

        for dep in dependencies.iter() {
            self.render_dependency(&mut output, dep)?;
        }
        Ok(output)
    }
}
