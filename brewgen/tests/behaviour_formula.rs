//! Behaviour-driven tests for end-to-end formula generation.
//!
//! Scenarios run the pipeline with stub collaborators from the
//! `test-support` feature, so no network or filesystem writes take place.
//! Tests use the rstest-bdd v0.5.0 mutable world pattern.

use brewgen::artefact::digest::digest_bytes;
use brewgen::error::GeneratorError;
use brewgen::pipeline::{GeneratedFormula, PipelineConfig, generate_formula_with};
use brewgen::request::FormulaRequest;
use brewgen::test_support::{FetchBehaviour, MemoryWriter, StubFetcher};
use camino::Utf8Path;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const KNOWN_BYTES: &[u8] = b"\x7fELF";
const URL: &str = "https://files.test/artefact";
const OUTPUT_DIR: &str = "/tap/Formula";

// ---------------------------------------------------------------------------
// World types
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FormulaWorld {
    request: Option<FormulaRequest>,
    fetch: Option<FetchBehaviour>,
    fetcher: Option<StubFetcher>,
    writer: MemoryWriter,
    result: Option<Result<GeneratedFormula, GeneratorError>>,
}

impl FormulaWorld {
    fn update_request(&mut self, f: impl FnOnce(FormulaRequest) -> FormulaRequest) {
        let request = self.request.take().expect("request set");
        self.request = Some(f(request));
    }

    fn generated(&self) -> &GeneratedFormula {
        match self.result.as_ref().expect("generation ran") {
            Ok(generated) => generated,
            Err(err) => panic!("expected success, got {err}"),
        }
    }

    fn error(&self) -> &GeneratorError {
        match self.result.as_ref().expect("generation ran") {
            Ok(_) => panic!("expected failure, got success"),
            Err(err) => err,
        }
    }
}

#[fixture]
fn world() -> FormulaWorld {
    FormulaWorld::default()
}

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

#[given("a project named \"{name}\" at version \"{version}\"")]
fn given_project(world: &mut FormulaWorld, name: String, version: String) {
    world.request = Some(FormulaRequest::new(name, version, URL));
}

#[given("the binary is called \"{binary}\"")]
fn given_binary(world: &mut FormulaWorld, binary: String) {
    world.update_request(|r| r.with_binary_name(binary));
}

#[given("the artefact is a raw binary")]
fn given_raw_binary(world: &mut FormulaWorld) {
    world.update_request(|r| r.with_skip_extraction(true));
}

#[given("an empty description")]
fn given_empty_description(world: &mut FormulaWorld) {
    world.update_request(|r| r.with_description(""));
}

#[given("ad-hoc signing is disabled")]
fn given_signing_disabled(world: &mut FormulaWorld) {
    world.update_request(|r| r.with_ad_hoc_sign(false));
}

#[given("the artefact serves four known bytes")]
fn given_known_bytes(world: &mut FormulaWorld) {
    world.fetch = Some(FetchBehaviour::Bytes(KNOWN_BYTES.to_vec()));
}

#[given("the artefact download returns not found")]
fn given_not_found(world: &mut FormulaWorld) {
    world.fetch = Some(FetchBehaviour::NotFound);
}

#[when("the formula is generated")]
fn when_generated(world: &mut FormulaWorld) {
    let request = world.request.clone().expect("request set");
    let fetcher = StubFetcher::new(world.fetch.clone().expect("fetch behaviour set"));
    let config = PipelineConfig {
        output_dir: Utf8Path::new(OUTPUT_DIR),
        quiet: true,
        dry_run: false,
    };
    let mut stdout = Vec::new();
    world.result = Some(generate_formula_with(
        &request,
        &config,
        &fetcher,
        &world.writer,
        &mut stdout,
    ));
    world.fetcher = Some(fetcher);
}

#[then("the formula class is \"{class}\"")]
fn then_class(world: &mut FormulaWorld, class: String) {
    let generated = world.generated();
    assert_eq!(generated.name.class(), class);
    assert!(
        generated
            .text
            .as_str()
            .starts_with(&format!("class {class} < Formula\n"))
    );
}

#[then("the formula is written to \"{file}\"")]
fn then_written_to(world: &mut FormulaWorld, file: String) {
    let expected = Utf8Path::new(OUTPUT_DIR).join(&file);
    assert_eq!(world.generated().path.as_deref(), Some(expected.as_path()));
    let written = world.writer.written();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].0, expected);
}

#[then("the formula contains the no-unzip directive once")]
fn then_nounzip_once(world: &mut FormulaWorld) {
    let text = world.generated().text.as_str();
    assert_eq!(text.matches("using: :nounzip").count(), 1);
}

#[then("the formula has no no-unzip directive")]
fn then_no_nounzip(world: &mut FormulaWorld) {
    assert!(!world.generated().text.as_str().contains("nounzip"));
}

#[then("the formula contains a post-install block for \"{binary}\"")]
fn then_post_install_for(world: &mut FormulaWorld, binary: String) {
    let text = world.generated().text.as_str();
    assert_eq!(text.matches("def post_install").count(), 1);
    let target = format!("bin/\"{binary}\"");
    let operations: Vec<&str> = text
        .lines()
        .filter(|line| line.trim_start().starts_with("system ") && line.ends_with(&target))
        .collect();
    assert_eq!(operations.len(), 3, "operations: {operations:?}");
    assert!(operations[0].contains("/bin/chmod"));
    assert!(operations[1].contains("com.apple.quarantine"));
    assert!(operations[2].contains("/usr/bin/codesign"));
}

#[then("the formula has no post-install block")]
fn then_no_post_install(world: &mut FormulaWorld) {
    assert!(!world.generated().text.as_str().contains("post_install"));
}

#[then("the formula pins the SHA-256 of the artefact")]
fn then_pins_sha(world: &mut FormulaWorld) {
    let expected = digest_bytes(KNOWN_BYTES);
    let generated = world.generated();
    assert_eq!(generated.digests, expected);
    assert!(
        generated
            .text
            .as_str()
            .contains(&format!("  sha256 \"{}\"\n", expected.sha256()))
    );
}

#[then("the formula description is \"{desc}\"")]
fn then_description(world: &mut FormulaWorld, desc: String) {
    let text = world.generated().text.as_str();
    assert!(text.contains(&format!("  desc \"{desc}\"\n")), "text: {text}");
}

#[then("the temporary artefact has been removed")]
fn then_artefact_removed(world: &mut FormulaWorld) {
    let fetcher = world.fetcher.as_ref().expect("fetcher used");
    let path = fetcher.last_artefact_path().expect("artefact materialised");
    assert!(!path.exists());
}

#[then("generation fails with a validation error")]
fn then_validation_error(world: &mut FormulaWorld) {
    assert!(matches!(world.error(), GeneratorError::Validation(_)));
}

#[then("generation fails with a fetch error")]
fn then_fetch_error(world: &mut FormulaWorld) {
    assert!(matches!(world.error(), GeneratorError::Fetch(_)));
}

#[then("the artefact was never fetched")]
fn then_never_fetched(world: &mut FormulaWorld) {
    assert_eq!(world.fetcher.as_ref().expect("fetcher built").calls(), 0);
}

#[then("no formula is written")]
fn then_nothing_written(world: &mut FormulaWorld) {
    assert!(world.writer.written().is_empty());
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/formula_generation.feature",
    name = "Generate a signed formula for a raw binary"
)]
fn scenario_signed_raw_binary(world: FormulaWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/formula_generation.feature",
    name = "Default the description from the project name"
)]
fn scenario_default_description(world: FormulaWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/formula_generation.feature",
    name = "Skip ad-hoc signing"
)]
fn scenario_skip_signing(world: FormulaWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/formula_generation.feature",
    name = "Reject a name without alphanumeric characters"
)]
fn scenario_reject_name(world: FormulaWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/formula_generation.feature",
    name = "Abort when the download fails"
)]
fn scenario_download_failure(world: FormulaWorld) {
    let _ = world;
}
