pub mod backend;
pub mod dialog;
pub mod format;
pub mod session;
pub mod storage;
pub mod validation;
