//! Full-system tests driven through the public `stockroom` facade.

mod persistence;
mod scenario;
