//! Placement-canvas engine for arranging wardrobe items into outfits.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the outfit canvas: translating raw DOM input events into
//! placement mutations, maintaining viewport state for pan/zoom, running the
//! asynchronous drop pipeline (image-dimension probes resolve after the drop
//! lands), and projecting the item set into screen-space boxes for the host to
//! draw. The host JavaScript layer is responsible only for wiring DOM events to
//! the engine, measuring dropped images, and persisting exported outfit
//! records to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Placement engine: item set, selection, gestures, drop pipeline |
//! | [`item`] | Catalog descriptors, placed items, and the z-ordered store |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`geometry`] | Points, sizes, content bounds, and fit-scale math |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`render`] | Pure projections: live view and fitted preview |
//! | [`outfit`] | Serialization bridge to the persisted outfit record format |
//! | [`host`] | `wasm-bindgen` boundary exposed to the hosting page |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod input;
pub mod item;
pub mod outfit;
pub mod render;
pub mod viewport;
