// Grist: distinctive-term ranking for plain-text documents
//
// This is the library root. The analysis module is the algorithmic core;
// everything else is a thin boundary around it.

pub mod analysis;
pub mod config;
pub mod output;
pub mod web;
