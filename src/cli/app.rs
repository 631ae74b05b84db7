//! Main app runner for predict-prob

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::application::ports::ModelLoader;
use crate::application::{PredictError, PredictInput, PredictUseCase};
use crate::infrastructure::create_loader;

use super::args::{Cli, PredictOptions, USAGE};
use super::logging;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the CLI with the given arguments (program name first)
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (cli, options) = match parse_invocation(args) {
        Ok(parsed) => parsed,
        Err(code) => return ExitCode::from(code),
    };

    logging::init(cli.verbose, cli.log.as_deref());
    debug!(?options, "arguments resolved");

    let mut presenter = Presenter::new();

    // The backend must exist before any input is consumed
    let loader = match create_loader() {
        Ok(loader) => loader,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let stdin = io::stdin();
    ExitCode::from(run_predict(options, loader, stdin.lock(), &mut presenter))
}

/// Parse the command line into options.
///
/// On failure the usage line (or help/version) has already been printed and
/// the exit code is returned.
pub fn parse_invocation<I, T>(args: I) -> Result<(Cli, PredictOptions), u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| handle_parse_error(&e))?;
    match PredictOptions::try_from(&cli) {
        Ok(options) => Ok((cli, options)),
        Err(e) => {
            Presenter::new().usage(&e.to_string());
            Err(EXIT_ERROR)
        }
    }
}

/// Map a clap parse failure onto an exit code.
///
/// Help and version requests print as usual and succeed; every other
/// failure prints the usage line.
pub fn handle_parse_error(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            EXIT_SUCCESS
        }
        _ => {
            Presenter::new().usage(USAGE);
            EXIT_ERROR
        }
    }
}

/// Read all of `input`, classify it and present the predictions.
///
/// Returns the process exit code. Empty input fails without any output.
pub fn run_predict<L, R, W>(
    options: PredictOptions,
    loader: L,
    mut input: R,
    presenter: &mut Presenter<W>,
) -> u8
where
    L: ModelLoader,
    R: Read,
    W: Write,
{
    let mut raw_text = Vec::new();
    if let Err(e) = input.read_to_end(&mut raw_text) {
        presenter.error(&format!("Failed to read input: {}", e));
        return EXIT_ERROR;
    }

    let use_case = PredictUseCase::new(loader);
    let request = PredictInput {
        model_path: options.model_path,
        raw_text,
        k: options.k,
    };

    match use_case.execute(request) {
        Ok(output) => match presenter.predictions(&output.predictions) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                presenter.error(&format!("Failed to write output: {}", e));
                EXIT_ERROR
            }
        },
        Err(PredictError::EmptyInput(_)) => EXIT_ERROR,
        Err(PredictError::Classifier(e)) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::{Classifier, ClassifierError};
    use crate::domain::{InputText, Prediction, TopK};

    struct StaticModel;

    impl Classifier for StaticModel {
        fn predict(&self, _text: &InputText, k: TopK) -> Result<Vec<Prediction>, ClassifierError> {
            let labels = [("__label__en", 0.75_f32), ("__label__de", 0.125)];
            Ok(labels
                .iter()
                .take(k.get().max(0) as usize)
                .map(|(label, p)| Prediction::new(*label, *p))
                .collect())
        }
    }

    struct StaticLoader;

    impl ModelLoader for StaticLoader {
        fn name(&self) -> &'static str {
            "static"
        }

        fn load(&self, _path: &Path) -> Result<Box<dyn Classifier>, ClassifierError> {
            Ok(Box::new(StaticModel))
        }
    }

    struct BrokenLoader;

    impl ModelLoader for BrokenLoader {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn load(&self, path: &Path) -> Result<Box<dyn Classifier>, ClassifierError> {
            Err(ClassifierError::Load {
                path: path.display().to_string(),
                message: "bad magic".to_string(),
            })
        }
    }

    fn options(k: Option<&str>) -> PredictOptions {
        PredictOptions {
            model_path: PathBuf::from("model.bin"),
            k: TopK::parse_lenient(k),
        }
    }

    fn run_with<L: ModelLoader>(loader: L, stdin: &str, k: Option<&str>) -> (u8, String) {
        let mut presenter = Presenter::with_writer(Vec::new());
        let code = run_predict(options(k), loader, stdin.as_bytes(), &mut presenter);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        (code, out)
    }

    #[test]
    fn prints_top_two_predictions() {
        let (code, out) = run_with(StaticLoader, "hello world", Some("2"));
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "__label__en 0.75\n__label__de 0.125\n");
    }

    #[test]
    fn default_k_prints_one_line() {
        let (code, out) = run_with(StaticLoader, "hello world\n", None);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn malformed_k_matches_omitted_k() {
        let (_, omitted) = run_with(StaticLoader, "hello", None);
        for raw in ["abc", "3.5"] {
            let (code, out) = run_with(StaticLoader, "hello", Some(raw));
            assert_eq!(code, EXIT_SUCCESS);
            assert_eq!(out, omitted);
        }
    }

    #[test]
    fn zero_predictions_still_succeed() {
        let (code, out) = run_with(StaticLoader, "hello", Some("0"));
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.is_empty());
    }

    #[test]
    fn whitespace_input_fails_silently() {
        for stdin in ["", "   ", "\n\t\r\n"] {
            let (code, out) = run_with(StaticLoader, stdin, None);
            assert_eq!(code, EXIT_ERROR);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn load_failure_exits_with_error() {
        let (code, out) = run_with(BrokenLoader, "hello", None);
        assert_eq!(code, EXIT_ERROR);
        assert!(out.is_empty());
    }

    #[test]
    fn help_request_succeeds() {
        let err = Cli::try_parse_from(["fasttext", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(handle_parse_error(&err), EXIT_SUCCESS);
    }

    #[test]
    fn usage_errors_exit_with_one() {
        for argv in [
            vec!["fasttext"],
            vec!["fasttext", "predict-prob"],
            vec!["fasttext", "predict-prob", "model.bin"],
            vec!["fasttext", "predict", "model.bin", "-"],
            vec!["fasttext", "--unknown", "predict-prob", "model.bin", "-"],
        ] {
            let code = parse_invocation(argv.clone()).err();
            assert_eq!(code, Some(EXIT_ERROR), "argv = {:?}", argv);
        }
    }

    #[test]
    fn help_in_positional_slot_is_not_a_help_request() {
        let (_, options) =
            parse_invocation(["fasttext", "predict-prob", "model.bin", "--help"]).unwrap();
        assert_eq!(options.k, TopK::default());
    }

    #[test]
    fn fifth_argument_does_not_change_output() {
        let run_argv = |argv: &[&str]| {
            let (_, options) = parse_invocation(argv.iter().copied()).unwrap();
            let mut presenter = Presenter::with_writer(Vec::new());
            let code = run_predict(options, StaticLoader, "hello".as_bytes(), &mut presenter);
            (code, String::from_utf8(presenter.into_inner()).unwrap())
        };

        let four = run_argv(&["fasttext", "predict-prob", "model.bin", "-", "2"]);
        let five = run_argv(&["fasttext", "predict-prob", "model.bin", "-", "2", "0.9"]);
        assert_eq!(four, five);
        assert_eq!(five.1.lines().count(), 2);
    }
}
