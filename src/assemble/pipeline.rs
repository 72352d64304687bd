//! assemble::pipeline
//!
//! The build orchestrator.
//!
//! # Lifecycle
//!
//! One `Pipeline::run` call executes the whole build:
//!
//! 1. **ModulesLoading**: read every manifest module, in order
//! 2. **Injecting**: read the template and splice the concatenated content
//!    at the marker
//! 3. **RawWritten**: the raw artifact is on disk
//! 4. **Minifying**: the external tool produces the compressed artifact
//! 5. **Done**: both artifacts present; a [`BuildReport`] is returned
//!
//! Transitions are strictly sequential and never revisit an earlier state.
//! Any failure moves the pipeline to the terminal `Failed` state and stops
//! the build immediately: a prior raw artifact may have been overwritten
//! while minification subsequently failed, leaving a stale or absent
//! compressed artifact. Nothing is rolled back.
//!
//! # Ownership
//!
//! The pipeline owns the manifest and both artifact paths for the duration
//! of one build. Nothing is cached across builds - every run re-reads all
//! inputs and fully regenerates both outputs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use super::{inject, reader, writer, BuildError, BuildLock};
use crate::core::manifest::Manifest;
use crate::core::paths::BuildPaths;
use crate::core::types::{ArtifactDigest, UtcTimestamp};
use crate::minify::Minifier;

/// Pipeline state.
///
/// `Failed` is terminal and reachable from every non-terminal state; `Done`
/// is terminal and reachable only from `Minifying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// No build started yet.
    Idle,
    /// Reading manifest modules.
    ModulesLoading,
    /// Splicing content into the template.
    Injecting,
    /// Raw artifact persisted.
    RawWritten,
    /// External minifier running.
    Minifying,
    /// Both artifacts present.
    Done,
    /// Build aborted; artifacts on disk are not trustworthy.
    Failed,
}

impl std::fmt::Display for BuildState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildState::Idle => "idle",
            BuildState::ModulesLoading => "modules-loading",
            BuildState::Injecting => "injecting",
            BuildState::RawWritten => "raw-written",
            BuildState::Minifying => "minifying",
            BuildState::Done => "done",
            BuildState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Summary of one successful build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// When the build started.
    pub started_at: UtcTimestamp,
    /// Wall-clock duration of the build.
    pub duration_ms: u64,
    /// Number of modules assembled.
    pub modules: usize,
    /// Raw artifact destination.
    pub raw_path: PathBuf,
    /// Raw artifact size in bytes.
    pub raw_bytes: u64,
    /// Content digest of the raw artifact.
    pub raw_digest: ArtifactDigest,
    /// Compressed artifact destination.
    pub min_path: PathBuf,
    /// Compressed artifact size in bytes, when readable after minification.
    pub min_bytes: Option<u64>,
    /// Content digest of the compressed artifact, when readable.
    pub min_digest: Option<ArtifactDigest>,
}

/// The build orchestrator.
///
/// Generic over [`Minifier`] so tests can drive the full pipeline with a
/// mock that never shells out.
///
/// # Example
///
/// ```no_run
/// use bindery::assemble::Pipeline;
/// use bindery::core::config::Config;
/// use bindery::minify::ExternalMinifier;
/// use std::path::Path;
///
/// let root = Path::new(".");
/// let config = Config::load(root).unwrap();
/// let minifier = ExternalMinifier::new(config.minifier_command().unwrap());
/// let mut pipeline = Pipeline::new(
///     config.build_paths(root),
///     config.manifest().unwrap(),
///     config.marker(),
///     minifier,
/// );
/// let report = pipeline.run().unwrap();
/// println!("{} -> {}", report.raw_path.display(), report.min_path.display());
/// ```
#[derive(Debug)]
pub struct Pipeline<M: Minifier> {
    paths: BuildPaths,
    manifest: Manifest,
    marker: String,
    minifier: M,
    state: BuildState,
}

impl<M: Minifier> Pipeline<M> {
    /// Create a pipeline for one build.
    pub fn new(
        paths: BuildPaths,
        manifest: Manifest,
        marker: impl Into<String>,
        minifier: M,
    ) -> Self {
        Self {
            paths,
            manifest,
            marker: marker.into(),
            minifier,
            state: BuildState::Idle,
        }
    }

    /// The pipeline's current state.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Execute the full build.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] encountered; the pipeline moves to
    /// `Failed` and whatever artifacts were already written remain on disk.
    pub fn run(&mut self) -> Result<BuildReport, BuildError> {
        match self.execute() {
            Ok(report) => Ok(report),
            Err(e) => {
                self.state = BuildState::Failed;
                Err(e)
            }
        }
    }

    fn execute(&mut self) -> Result<BuildReport, BuildError> {
        let started_at = UtcTimestamp::now();
        let timer = Instant::now();

        let _lock = BuildLock::acquire(&self.paths.lock_path())?;

        self.state = BuildState::ModulesLoading;
        let modules = reader::read_modules(&self.paths, &self.manifest)?;
        let injected = reader::concat(&modules);

        self.state = BuildState::Injecting;
        let template_path = self.paths.template().to_path_buf();
        let template = fs::read_to_string(&template_path).map_err(|e| BuildError::Template {
            path: template_path,
            source: e,
        })?;
        let artifact = inject::inject(&template, &self.marker, &injected)?;

        writer::write_artifact(self.paths.raw_out(), &artifact)?;
        self.state = BuildState::RawWritten;

        self.state = BuildState::Minifying;
        self.minifier
            .run(self.paths.raw_out(), self.paths.min_out())?;

        self.state = BuildState::Done;

        // Sizes and digests are reporting only; the minifier's output is
        // never validated, so a tool that wrote nothing still succeeds.
        let min_bytes = fs::metadata(self.paths.min_out()).ok().map(|m| m.len());
        let min_digest = fs::read(self.paths.min_out())
            .ok()
            .map(|bytes| ArtifactDigest::of(&bytes));

        Ok(BuildReport {
            started_at,
            duration_ms: timer.elapsed().as_millis() as u64,
            modules: modules.len(),
            raw_path: self.paths.raw_out().to_path_buf(),
            raw_bytes: artifact.len() as u64,
            raw_digest: ArtifactDigest::of(artifact.as_bytes()),
            min_path: self.paths.min_out().to_path_buf(),
            min_bytes,
            min_digest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::assemble::InjectError;
    use crate::core::types::ModuleId;
    use crate::minify::{MinifyError, MockMinifier};

    const MARKER: &str = "/*{{inject_build}}*/";

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn root(&self) -> &Path {
            self.dir.path()
        }

        fn write_module(&self, name: &str, content: &str) {
            let dir = self.root().join("src");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{name}.js")), content).unwrap();
        }

        fn write_template(&self, content: &str) {
            let dir = self.root().join("src");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("main.js"), content).unwrap();
        }

        fn paths(&self) -> BuildPaths {
            BuildPaths::new(
                self.root(),
                Path::new("src"),
                "js",
                Path::new("src/main.js"),
                Path::new("dist/lib.js"),
                Path::new("dist/lib.min.js"),
            )
        }

        fn manifest(&self, names: &[&str]) -> Manifest {
            Manifest::new(
                names
                    .iter()
                    .map(|n| ModuleId::new(*n).unwrap())
                    .collect(),
            )
            .unwrap()
        }

        fn raw_content(&self) -> String {
            fs::read_to_string(self.root().join("dist/lib.js")).unwrap()
        }
    }

    #[test]
    fn full_build_produces_both_artifacts() {
        let fx = Fixture::new();
        fx.write_module("a", "var A = 1;\n");
        fx.write_module("b", "var B = A + 1;\n");
        fx.write_template(&format!("head\n{MARKER}\ntail\n"));

        let minifier = MockMinifier::new();
        let mut pipeline =
            Pipeline::new(fx.paths(), fx.manifest(&["a", "b"]), MARKER, minifier.clone());
        let report = pipeline.run().unwrap();

        assert_eq!(pipeline.state(), BuildState::Done);
        assert_eq!(report.modules, 2);
        assert_eq!(
            fx.raw_content(),
            "head\nvar A = 1;\nvar B = A + 1;\n\ntail\n"
        );
        assert_eq!(
            fs::read_to_string(fx.root().join("dist/lib.min.js")).unwrap(),
            fx.raw_content()
        );
        assert_eq!(report.raw_bytes, fx.raw_content().len() as u64);
        assert_eq!(report.min_bytes, Some(report.raw_bytes));
        assert_eq!(report.min_digest.as_ref(), Some(&report.raw_digest));
    }

    #[test]
    fn minifier_invoked_with_raw_and_min_paths() {
        let fx = Fixture::new();
        fx.write_module("a", "x");
        fx.write_template(MARKER);

        let minifier = MockMinifier::new();
        Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, minifier.clone())
            .run()
            .unwrap();

        let invocations = minifier.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].0, fx.root().join("dist/lib.js"));
        assert_eq!(invocations[0].1, fx.root().join("dist/lib.min.js"));
    }

    #[test]
    fn concatenation_follows_manifest_order() {
        let fx = Fixture::new();
        fx.write_module("first", "1");
        fx.write_module("second", "2");
        fx.write_module("third", "3");
        fx.write_template(MARKER);

        Pipeline::new(
            fx.paths(),
            fx.manifest(&["third", "first", "second"]),
            MARKER,
            MockMinifier::new(),
        )
        .run()
        .unwrap();

        assert_eq!(fx.raw_content(), "312");
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let fx = Fixture::new();
        fx.write_module("a", "var A = 1;\n");
        fx.write_template(&format!("head\n{MARKER}\ntail\n"));

        let first = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap();
        let first_content = fx.raw_content();

        let second = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap();

        assert_eq!(fx.raw_content(), first_content);
        assert_eq!(first.raw_digest, second.raw_digest);
    }

    #[test]
    fn missing_module_aborts_before_raw_write() {
        let fx = Fixture::new();
        fx.write_module("a", "x");
        fx.write_template(MARKER);

        let mut pipeline = Pipeline::new(
            fx.paths(),
            fx.manifest(&["a", "ghost"]),
            MARKER,
            MockMinifier::new(),
        );
        let err = pipeline.run().unwrap_err();

        assert!(matches!(err, BuildError::MissingModule { .. }));
        assert_eq!(pipeline.state(), BuildState::Failed);
        assert!(!fx.root().join("dist/lib.js").exists());
    }

    #[test]
    fn marker_cardinality_violations_fail() {
        let fx = Fixture::new();
        fx.write_module("a", "x");

        fx.write_template("no marker at all");
        let err = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Inject(InjectError::MarkerNotFound { .. })
        ));

        fx.write_template(&format!("{MARKER}{MARKER}"));
        let err = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Inject(InjectError::AmbiguousMarker { count: 2, .. })
        ));
    }

    #[test]
    fn minifier_failure_leaves_raw_artifact() {
        let fx = Fixture::new();
        fx.write_module("a", "var A = 1;\n");
        fx.write_template(MARKER);

        let mut pipeline = Pipeline::new(
            fx.paths(),
            fx.manifest(&["a"]),
            MARKER,
            MockMinifier::failing(MinifyError::Failed {
                code: Some(2),
                stderr: "syntax error".into(),
            }),
        );
        let err = pipeline.run().unwrap_err();

        assert!(matches!(err, BuildError::Minify(_)));
        assert_eq!(pipeline.state(), BuildState::Failed);
        // The raw artifact was already written and is not rolled back.
        assert_eq!(fx.raw_content(), "var A = 1;\n");
        assert!(!fx.root().join("dist/lib.min.js").exists());
    }

    #[test]
    fn missing_template_fails() {
        let fx = Fixture::new();
        fx.write_module("a", "x");

        let err = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap_err();
        assert!(matches!(err, BuildError::Template { .. }));
    }

    #[test]
    fn empty_manifest_injects_nothing() {
        let fx = Fixture::new();
        fx.write_template(&format!("A{MARKER}B"));

        let report = Pipeline::new(fx.paths(), fx.manifest(&[]), MARKER, MockMinifier::new())
            .run()
            .unwrap();

        assert_eq!(report.modules, 0);
        assert_eq!(fx.raw_content(), "AB");
    }

    #[test]
    fn report_serializes_to_json() {
        let fx = Fixture::new();
        fx.write_module("a", "x");
        fx.write_template(MARKER);

        let report = Pipeline::new(fx.paths(), fx.manifest(&["a"]), MARKER, MockMinifier::new())
            .run()
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["modules"], 1);
        assert!(json["raw_digest"].is_string());
    }

    #[test]
    fn state_starts_idle() {
        let fx = Fixture::new();
        let pipeline = Pipeline::new(fx.paths(), fx.manifest(&[]), MARKER, MockMinifier::new());
        assert_eq!(pipeline.state(), BuildState::Idle);
    }

    #[test]
    fn state_display_names() {
        assert_eq!(BuildState::ModulesLoading.to_string(), "modules-loading");
        assert_eq!(BuildState::Done.to_string(), "done");
        assert_eq!(BuildState::Failed.to_string(), "failed");
    }
}
