//! Facility data parsing.
//!
//! X-Plane describes airports in line-based `apt.dat` files. The reader
//! streams one file, keeps only airports inside a search region and turns
//! their runways together with either the taxiway centerlines (row codes
//! `120`, `111`-`116`) or the taxi route network (row codes `1201`, `1202`)
//! into [`Airport`](crate::graph::Airport) graphs.

mod apt_dat;
mod centerline;

pub use apt_dat::{open_apt_dat, AptDatReader, ParseError, ReadStats};
