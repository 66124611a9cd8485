//! HTTP service for course feedback: submission, per-course statistics and
//! the university-wide feedback window.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;
