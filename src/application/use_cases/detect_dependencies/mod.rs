use crate::application::dto::DetectionRequest;
use crate::licence_detection::domain::{
    DependencyInfo, DependencyList, ModuleRecord, Override, Overrides, UNKNOWN_LICENCE,
};
use crate::licence_detection::policies::RuleEngine;
use crate::licence_detection::services::{LicenceFileLocator, UrlResolver};
use crate::ports::outbound::{LicenceClassifier, ProgressReporter};
use crate::shared::error::DetectorError;
use crate::shared::Result;
use std::path::Path;

/// DetectDependenciesUseCase - Core use case for licence detection
///
/// Turns the raw module list into a validated, partitioned dependency
/// list. Modules are processed one at a time in input order and the first
/// error aborts the run: there is no partial report.
///
/// # Type Parameters
/// * `C` - LicenceClassifier implementation
/// * `PR` - ProgressReporter implementation
pub struct DetectDependenciesUseCase<C, PR> {
    classifier: C,
    progress_reporter: PR,
}

impl<C, PR> DetectDependenciesUseCase<C, PR>
where
    C: LicenceClassifier,
    PR: ProgressReporter,
{
    /// Creates a new DetectDependenciesUseCase with injected dependencies
    pub fn new(classifier: C, progress_reporter: PR) -> Self {
        Self {
            classifier,
            progress_reporter,
        }
    }

    /// Executes the detection use case
    ///
    /// # Returns
    /// The dependency list, both buckets sorted by module path. `indirect`
    /// is empty unless the request includes indirect modules.
    ///
    /// # Errors
    /// Returns the first of:
    /// - `UnreadableLicenceOverride` for an override licence file that cannot be used
    /// - `ClassificationIoFailure` for a module directory or licence file that cannot be read
    /// - `LicencePolicyViolation` for a licence the rules do not allow
    pub fn execute(&self, request: DetectionRequest) -> Result<DependencyList> {
        // Step 1: Drop indirect modules unless requested
        let modules: Vec<&ModuleRecord> = request
            .modules
            .iter()
            .filter(|m| request.include_indirect || !m.indirect)
            .collect();

        self.progress_reporter.report(&format!(
            "🔍 Detecting licences for {} module(s)",
            modules.len()
        ));

        // Step 2: Resolve every module, stopping at the first failure
        let mut direct = Vec::new();
        let mut indirect = Vec::new();
        for (idx, module) in modules.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, modules.len(), Some(&module.path));

            let info = self.resolve_module(module, &request.rules, &request.overrides)?;
            if module.indirect {
                indirect.push(info);
            } else {
                direct.push(info);
            }
        }

        // Step 3: Sort both buckets
        let dependencies = DependencyList::new(direct, indirect);

        self.progress_reporter.report_completion(&format!(
            "✅ Validated licences of {} direct and {} indirect dependencies",
            dependencies.direct_count(),
            dependencies.indirect_count()
        ));

        Ok(dependencies)
    }

    /// Classifies, overrides, validates and links a single module
    fn resolve_module(
        &self,
        module: &ModuleRecord,
        rules: &RuleEngine,
        overrides: &Overrides,
    ) -> Result<DependencyInfo> {
        let entry = overrides
            .get(&module.path)
            .cloned()
            .map(Override::normalized)
            .unwrap_or_default();

        let licence_file = match entry.licence_file.as_deref() {
            Some(relative) => Some(LicenceFileLocator::resolve_override(
                &module.path,
                &module.dir,
                relative,
            )?),
            // Evidence only: the override already names the licence
            None if entry.licence_type.is_some() => {
                LicenceFileLocator::find(&module.path, &module.dir).unwrap_or_else(|e| {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Warning: No licence file for {}: {}",
                        module.path, e
                    ));
                    None
                })
            }
            None => LicenceFileLocator::find(&module.path, &module.dir)?,
        };

        let licence_type = match entry.licence_type {
            Some(licence_type) => licence_type,
            None => self.classify(module, licence_file.as_deref())?,
        };

        if !rules.is_allowed(&module.path, &licence_type) {
            return Err(DetectorError::LicencePolicyViolation {
                module: module.path.clone(),
                licence: licence_type,
            }
            .into());
        }

        Ok(DependencyInfo {
            module_path: module.path.clone(),
            name: entry.name.unwrap_or_else(|| module.path.clone()),
            version: entry.version.unwrap_or_else(|| module.version.clone()),
            version_time: module.version_time.clone(),
            dir: module.dir.clone(),
            licence_type,
            licence_file,
            url: UrlResolver::determine_url(entry.url.as_deref(), &module.path),
        })
    }

    /// Runs the classifier; an unrecognized licence becomes `UNKNOWN`
    fn classify(&self, module: &ModuleRecord, licence_file: Option<&Path>) -> Result<String> {
        let detected = self
            .classifier
            .classify(licence_file.unwrap_or(Path::new("")))
            .map_err(|e| attach_module(e, &module.path))?
            .filter(|licence| !licence.trim().is_empty());

        match detected {
            Some(licence) => Ok(licence),
            None => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: Could not determine the licence of {} ({})",
                    module.path,
                    describe_licence_file(licence_file)
                ));
                Ok(UNKNOWN_LICENCE.to_string())
            }
        }
    }
}

/// Detects, validates and partitions `modules` without progress output
///
/// Equivalent to running [`DetectDependenciesUseCase`] with a silent reporter.
pub fn detect<C: LicenceClassifier>(
    modules: Vec<ModuleRecord>,
    classifier: &C,
    rules: RuleEngine,
    overrides: Overrides,
    include_indirect: bool,
) -> Result<DependencyList> {
    let request = DetectionRequest::new(modules, rules, overrides, include_indirect);
    DetectDependenciesUseCase::new(classifier, SilentProgressReporter).execute(request)
}

struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_warning(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

fn attach_module(error: anyhow::Error, module: &str) -> anyhow::Error {
    match error.downcast::<DetectorError>() {
        Ok(err) => err.for_module(module).into(),
        Err(other) => other,
    }
}

fn describe_licence_file(licence_file: Option<&Path>) -> String {
    licence_file
        .map(|p| format!("unrecognized text in {}", p.display()))
        .unwrap_or_else(|| "no licence file found".to_string())
}
