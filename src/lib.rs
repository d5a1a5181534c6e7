//! SpiroMorph library - enveloped circular harmonics traced as a spirograph

pub mod cli;
pub mod error;
pub mod params;
pub mod rendering;
pub mod spiro;
pub mod timing;
