//! Statically compiled skill catalog from /skills/skills.json.
//! Generated at build time by build.rs; no runtime JSON parsing.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

include!(concat!(env!("OUT_DIR"), "/skills_generated.rs"));
