mod builder;
mod container;
mod injector;

pub use builder::ContainerBuilder;
pub use container::{Container, ServiceRef};
pub use injector::{Injectable, InjectionPoint, InjectionSlot};
