//! # Comic Shelf
//!
//! A personal comic library manager. Your filesystem is the database: each
//! imported page becomes a directory holding a JSON metadata document, the
//! page's panels as individual image artifacts, and a cover thumbnail.
//!
//! # Architecture: Engine Plus Thin Shell
//!
//! The crate has one algorithmic core and a deliberately boring shell
//! around it:
//!
//! ```text
//! 1. Segment   page bytes  →  ordered panels + cover   (the engine)
//! 2. Store     panels      →  comics/<id>/             (JSON + artifacts)
//! 3. Manage    list / favorite / rate / remove         (CRUD glue)
//! ```
//!
//! The [`segment`] engine is a pure, synchronous computation: decode the
//! page, find the whitespace scan margins, tile the drawable area into a
//! fixed grid, crop and re-encode every cell. It does no I/O and holds no
//! state between invocations, so unit tests can exercise every stage
//! without touching a disk and separate imports can run concurrently.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`segment`] | The page segmentation engine: margin detection, grid partitioning, panel extraction |
//! | [`store`] | Library document store — one directory per comic, `comic.json` + panel artifacts |
//! | [`config`] | `config.toml` loading and validation (grid shape, whiteness thresholds, workers) |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Fixed Grid, Not Layout Inference
//!
//! Pages are cut into a configured `rows x columns` grid (default 3x2)
//! rather than inferring panel borders from the artwork. The target is
//! personal scans with a known layout; a fixed grid keeps the engine
//! deterministic and the output predictable. Content-aware detection and
//! OCR are out of scope.
//!
//! ## Margin Detection Is a Gated Stage
//!
//! Whitespace trimming runs per [`segment::MarginMode`]: both edges
//! (default), bottom only, or disabled. A row counts as margin when its
//! white-pixel fraction exceeds a configured ratio, so dust specks and
//! scanner noise don't break the run. Detection always starts at an edge
//! and stops at the first inked row; a blank band inside the artwork is
//! never mistaken for a margin.
//!
//! ## JPEG Panels by Default
//!
//! Panel artifacts are JPEG at quality 90 by default. Scanned pages are
//! photographic material and a library of lossless panels grows painfully
//! fast; PNG and WebP remain available per config for archival use.
//!
//! ## Parallel Extraction, Deterministic Order
//!
//! The grid cells are independent crops of a read-only buffer, so panel
//! extraction fans out across a rayon pool sized by
//! `processing.max_processes`. Results are collected by cell index, never
//! by completion order: the panel sequence is row-major on every run.
//!
//! ## No Database Server
//!
//! Comic metadata lives in one pretty-printed `comic.json` per comic. The
//! documents are human-readable, diffable, and survive any tooling this
//! crate might grow later. Listing the library is a directory walk plus a
//! sort on the timestamp-derived ids.

pub mod config;
pub mod output;
pub mod segment;
pub mod store;
