use crate::board::Board;
use crate::errors::GridError;
use crate::log::init_logger;
use crate::prefix_index::PrefixIndex;
use crate::solver::GridSolver;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E005", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: "Failed to serialize result".to_string(),
        details: "The result could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize wordgrid logging with the specified debug setting.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Parse the board and dictionary coming from JavaScript into a ready solver.
fn build_solver(board_text: &str, dictionary: JsValue, min_len: usize) -> Result<GridSolver, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(dictionary).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("dictionary must be string[]: {e}"),
        description: "Invalid dictionary format".to_string(),
        details: "The dictionary parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass something like ['cats', 'scat', 'acts']".to_string()),
    })?;

    let board = Board::parse_from_str(board_text, None).map_err(WasmError::from)?;

    let mut index = PrefixIndex::new();
    let summary = index.extend_from_str(&words.join("\n"));
    log::debug!("Dictionary from JS: {summary:?}");

    Ok(GridSolver::new(board, index).with_min_word_len(min_len))
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    board: Vec<String>,
    words: Vec<String>,
    status: String,
}

/// JS entry: (board_text: string, dictionary: string[], min_len: number)
/// returns `{ board: string[], words: string[], status: string }`
#[wasm_bindgen]
pub fn solve_board_wasm(board_text: &str, dictionary: JsValue, min_len: usize) -> Result<JsValue, JsValue> {
    let mut solver = build_solver(board_text, dictionary, min_len)?;
    let result = solver.solve_all();

    let wasm_result = WasmSolveResult {
        board: solver.board().rows().collect(),
        words: solver.computer_words().words().collect(),
        status: result.status.label().to_string(),
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(serialization_error)
}

#[derive(serde::Serialize)]
struct WasmVerdict {
    word: String,
    accepted: bool,
    message: String,
}

/// JS entry: (board_text: string, dictionary: string[], min_len: number, candidates: string[])
/// returns one `{ word, accepted, message }` per candidate, in order
#[wasm_bindgen]
pub fn validate_words_wasm(
    board_text: &str,
    dictionary: JsValue,
    min_len: usize,
    candidates: JsValue,
) -> Result<JsValue, JsValue> {
    let mut solver = build_solver(board_text, dictionary, min_len)?;
    let candidates: Vec<String> = serde_wasm_bindgen::from_value(candidates).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("candidates must be string[]: {e}"),
        description: "Invalid candidate list".to_string(),
        details: "The candidates parameter must be a JavaScript array of strings.".to_string(),
        help: None,
    })?;

    let verdicts: Vec<WasmVerdict> = solver
        .validate_candidates(candidates)
        .into_iter()
        .map(|(word, verdict)| WasmVerdict { accepted: verdict.is_accepted(), message: verdict.to_string(), word })
        .collect();

    serde_wasm_bindgen::to_value(&verdicts).map_err(serialization_error)
}
