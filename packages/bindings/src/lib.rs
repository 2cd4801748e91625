use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// EMI
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::emi::schedule::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::emi::schedule::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_balance_transfer(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::emi::balance_transfer::BalanceTransferInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::emi::balance_transfer::compare_balance_transfer(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Fixed deposit
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_fd(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::fd::maturity::FdInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::fd::maturity::calculate_fd(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
