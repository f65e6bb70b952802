//! Carrusel horizontal con controles que conocen los bordes.
//!
//! El controlador no toca ningún árbol real: mide a través de
//! [`CarouselSurface`] y recibe los eventos del host como llamadas
//! (`on_activate`, `on_viewport_scrolled`, `on_animation_frame`, `on_resized`).

pub mod config;
pub mod controller;
pub mod geometry;
pub mod registry;
pub mod surface;

pub use config::CarouselConfig;
pub use controller::{CarouselController, FrameRequest};
pub use geometry::{ControlVisibility, EdgeState, ScrollMetrics, StepMetrics};
pub use registry::{Attached, CarouselRegistry};
pub use surface::{CarouselSurface, Direction, RegionId};
