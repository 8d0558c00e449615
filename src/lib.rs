//! # Police Records Core
//!
//! Deterministic, authorization-gated contract logic for two kinds of records
//! kept in a replicated key-value ledger: police personnel files and first
//! information report (FIR) case files.
//!
//! ## Features
//!
//! - **Deterministic execution**: no clocks, randomness or threads inside the
//!   contracts; ordered maps everywhere state is iterated
//! - **All-or-nothing invocations**: every call runs against a write-set
//!   overlay that is applied in one batch only when the call succeeds
//! - **Policy-table authorization**: gated operations are listed explicitly,
//!   the allowed org comes from configuration
//! - **Pluggable world state**: in-memory backend for embedding and tests,
//!   LMDB backend for persistence
//! - **FFI surface**: C-compatible functions returning JSON envelopes
//!
//! ## Quick Start
//!
//! ```rust
//! use police_records_core::contract_config::ContractConfig;
//! use police_records_core::identity::CallerIdentity;
//! use police_records_core::ledger::Ledger;
//! use police_records_core::world_state::MemoryWorldState;
//!
//! let mut ledger = Ledger::new(MemoryWorldState::new(), ContractConfig::new("Org1MSP"))?;
//! let police = CallerIdentity::new("Org1MSP");
//!
//! ledger.submit(&police, "seedCases", &[])?;
//! let status = ledger.evaluate(&police, "caseExists", &["FIR1".to_string()])?;
//! assert_eq!(status, "true");
//! # Ok::<(), police_records_core::contract_error::ContractError>(())
//! ```
//!
//! ## FFI Functions
//!
//! - [`open_ledger`] - Open an LMDB-backed ledger with a JSON config
//! - [`submit_transaction`] - Run an operation and commit its writes
//! - [`evaluate_transaction`] - Run an operation as a query
//! - [`close_ledger`] - Sync and release a ledger handle
//! - [`free_response`] - Release a string returned by this library

pub mod access_policy;
pub mod app_response;
pub mod case_contract;
pub mod case_record;
pub mod contract_config;
pub mod contract_error;
pub mod contract_router;
pub mod identity;
pub mod invocation;
pub mod ledger;
pub mod ledger_record;
pub mod lmdb_world_state;
pub mod operation;
pub mod personnel_contract;
pub mod personnel_record;
pub mod record_engine;
pub mod record_scan;
pub mod seeder;
pub mod tx_stub;
pub mod world_state;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::contract_config::ContractConfig;
use crate::identity::CallerIdentity;
use crate::ledger::Ledger;
use crate::lmdb_world_state::LmdbWorldState;

/// Ledger handle passed across the FFI boundary.
pub type LedgerHandle = Ledger<LmdbWorldState>;

/// Opens an LMDB-backed ledger.
///
/// The world state lives in a `<name>.lmdb` directory, created if missing.
///
/// # Parameters
///
/// * `name` - Null-terminated C string with the database name
/// * `config_json` - Null-terminated C string with the [`ContractConfig`] JSON
///
/// # Returns
///
/// A pointer to the ledger, or a null pointer on failure. Release it with
/// [`close_ledger`].
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use police_records_core::open_ledger;
///
/// let name = CString::new("records").unwrap();
/// let config = CString::new(r#"{"authorizedOrg":"Org1MSP"}"#).unwrap();
/// let ledger = open_ledger(name.as_ptr(), config.as_ptr());
/// assert!(!ledger.is_null());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn open_ledger(name: *const c_char, config_json: *const c_char) -> *mut LedgerHandle {
    let Some(name) = c_ptr_to_str(name) else {
        warn!("Null or non UTF-8 name passed to open_ledger");
        return std::ptr::null_mut();
    };
    let Some(config_json) = c_ptr_to_str(config_json) else {
        warn!("Null or non UTF-8 config passed to open_ledger");
        return std::ptr::null_mut();
    };

    let config = match ContractConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => {
            warn!("❌ Rejected ledger config: {e}");
            return std::ptr::null_mut();
        }
    };

    let ledger = LmdbWorldState::init(name).and_then(|state| Ledger::new(state, config));
    match ledger {
        Ok(ledger) => {
            info!("✅ Ledger '{name}' opened");
            Box::into_raw(Box::new(ledger))
        }
        Err(e) => {
            warn!("❌ Failed to open ledger '{name}': {e}");
            std::ptr::null_mut()
        }
    }
}

/// Runs an operation and commits its writes when it succeeds.
///
/// # Parameters
///
/// * `handle` - Ledger from [`open_ledger`]
/// * `msp_id` - Caller org id; a null pointer means the identity could not be
///   resolved and every gated operation is denied
/// * `operation` - Operation name, e.g. `createPersonnel`
/// * `args_json` - JSON array of string arguments, e.g. `["POL12345"]`
///
/// # Returns
///
/// A JSON envelope such as `{"Ok":"…"}` or `{"NotFound":"…"}`. Release it with
/// [`free_response`].
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use police_records_core::{open_ledger, submit_transaction, free_response};
///
/// let name = CString::new("records").unwrap();
/// let config = CString::new(r#"{"authorizedOrg":"Org1MSP"}"#).unwrap();
/// let ledger = open_ledger(name.as_ptr(), config.as_ptr());
///
/// let org = CString::new("Org1MSP").unwrap();
/// let op = CString::new("updateCaseStatus").unwrap();
/// let args = CString::new(r#"["FIR1","Closed"]"#).unwrap();
/// let response = submit_transaction(ledger, org.as_ptr(), op.as_ptr(), args.as_ptr());
/// free_response(response);
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn submit_transaction(
    handle: *mut LedgerHandle,
    msp_id: *const c_char,
    operation: *const c_char,
    args_json: *const c_char,
) -> *const c_char {
    let ledger = match unsafe { handle.as_mut() } {
        Some(ledger) => ledger,
        None => {
            let error = AppResponse::BadRequest("Null ledger pointer passed to submit_transaction".to_string());
            return response_to_c_string(&error);
        }
    };

    let (caller, operation, args) = match read_invocation(msp_id, operation, args_json) {
        Ok(parts) => parts,
        Err(error_ptr) => return error_ptr,
    };

    let response = AppResponse::from(ledger.submit(&caller, &operation, &args));
    response_to_c_string(&response)
}

/// Runs an operation as a query; nothing is written.
///
/// Takes the same parameters as [`submit_transaction`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn evaluate_transaction(
    handle: *mut LedgerHandle,
    msp_id: *const c_char,
    operation: *const c_char,
    args_json: *const c_char,
) -> *const c_char {
    let ledger = match unsafe { handle.as_ref() } {
        Some(ledger) => ledger,
        None => {
            let error = AppResponse::BadRequest("Null ledger pointer passed to evaluate_transaction".to_string());
            return response_to_c_string(&error);
        }
    };

    let (caller, operation, args) = match read_invocation(msp_id, operation, args_json) {
        Ok(parts) => parts,
        Err(error_ptr) => return error_ptr,
    };

    let response = AppResponse::from(ledger.evaluate(&caller, &operation, &args));
    response_to_c_string(&response)
}

/// Syncs the ledger to disk and releases the handle.
///
/// The handle must not be used after this call, whatever the response.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_ledger(handle: *mut LedgerHandle) -> *const c_char {
    if handle.is_null() {
        let error = AppResponse::BadRequest("Null ledger pointer passed to close_ledger".to_string());
        return response_to_c_string(&error);
    }

    let ledger = unsafe { Box::from_raw(handle) };
    let response = match ledger.state().close() {
        Ok(()) => AppResponse::success("Ledger closed successfully"),
        Err(e) => AppResponse::from(e),
    };
    drop(ledger);
    response_to_c_string(&response)
}

/// Releases a string returned by any function of this library.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

/// Decodes caller, operation name and argument list of an FFI invocation.
fn read_invocation(
    msp_id: *const c_char,
    operation: *const c_char,
    args_json: *const c_char,
) -> Result<(CallerIdentity, String, Vec<String>), *const c_char> {
    let caller = if msp_id.is_null() {
        CallerIdentity::unresolved()
    } else {
        CallerIdentity::from_optional(c_ptr_to_str(msp_id).map(str::to_string))
    };

    let operation = c_ptr_to_string(operation, "operation")?;
    let args_json = c_ptr_to_string(args_json, "args")?;

    let args: Vec<String> = match serde_json::from_str(&args_json) {
        Ok(args) => args,
        Err(e) => {
            let error = AppResponse::InvalidArgument(format!("args must be a JSON array of strings: {e}"));
            return Err(response_to_c_string(&error));
        }
    };

    Ok((caller, operation, args))
}

/// Converts an [`AppResponse`] to a C string owned by the caller.
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

fn c_ptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr).to_str().ok() }
}

/// Converts a C string pointer to a `String`, or to a ready-made `BadRequest`
/// response when the pointer is null or not UTF-8.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
