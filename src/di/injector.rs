use crate::di::container::{Container, ServiceRef};
use crate::error::{PortsideError, Result};
use std::sync::Arc;

/// One marked field of an injection target: the field's name, the service
/// name from its marker, and a type-erased slot to assign into.
pub struct InjectionPoint<'a> {
    field: &'static str,
    service: &'static str,
    slot: &'a mut dyn InjectionSlot,
}

impl<'a> InjectionPoint<'a> {
    pub fn new(
        field: &'static str,
        service: &'static str,
        slot: &'a mut dyn InjectionSlot,
    ) -> Self {
        Self {
            field,
            service,
            slot,
        }
    }
}

/// A mutable location a resolved service can be assigned into.
///
/// `assign` returns `false` when the service is not of the slot's type;
/// the injector treats that as a skip, not an error.
pub trait InjectionSlot {
    fn assign(&mut self, service: ServiceRef) -> bool;
}

impl<T: Send + Sync + 'static> InjectionSlot for Option<Arc<T>> {
    fn assign(&mut self, service: ServiceRef) -> bool {
        match service.downcast::<T>() {
            Ok(service) => {
                *self = Some(service);
                true
            }
            Err(_) => false,
        }
    }
}

/// Types whose marked fields can be populated from a [`Container`].
///
/// Typically implemented via `#[derive(Injectable)]`, which turns each
/// `#[inject("serviceName")]` field into one injection point, in declaration
/// order. Hand-written impls are equivalent.
pub trait Injectable {
    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>>;
}

impl Container {
    /// Populate every marked field of `target` from the registry.
    ///
    /// Fields are processed in declaration order. A field whose service
    /// cannot be resolved aborts the whole operation; fields injected
    /// before the failure keep their values. A field whose service resolves
    /// to an incompatible type is left as it was — injection is
    /// opportunistic, not strict.
    pub fn resolve_into(&self, target: &mut dyn Injectable) -> Result<()> {
        for point in target.injection_points() {
            let service = self.get(point.service).map_err(|source| {
                PortsideError::InjectionFailed {
                    field: point.field,
                    source: Box::new(source),
                }
            })?;

            if !point.slot.assign(service) {
                tracing::debug!(
                    target: "portside::di",
                    field = point.field,
                    service = point.service,
                    "resolved service is not assignable to field, skipping"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Wiring {
        greeting: Option<Arc<String>>,
        port: Option<Arc<u16>>,
    }

    impl Injectable for Wiring {
        fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
            vec![
                InjectionPoint::new("greeting", "greeting", &mut self.greeting),
                InjectionPoint::new("port", "port", &mut self.port),
            ]
        }
    }

    #[test]
    fn populates_marked_fields() {
        let container = Container::new();
        container.register("greeting", || "hello".to_string());
        container.register("port", || 8080u16);

        let mut wiring = Wiring::default();
        container.resolve_into(&mut wiring).unwrap();

        assert_eq!(wiring.greeting.as_deref(), Some(&"hello".to_string()));
        assert_eq!(wiring.port.as_deref(), Some(&8080));
    }

    #[test]
    fn missing_service_aborts_but_keeps_earlier_fields() {
        let container = Container::new();
        container.register("greeting", || "hello".to_string());

        let mut wiring = Wiring::default();
        let err = container.resolve_into(&mut wiring).unwrap_err();

        assert!(matches!(
            err,
            PortsideError::InjectionFailed { field: "port", .. }
        ));
        // No rollback: the field injected before the failure stays set
        assert!(wiring.greeting.is_some());
        assert!(wiring.port.is_none());
    }

    #[test]
    fn incompatible_type_is_skipped_without_error() {
        let container = Container::new();
        container.register("greeting", || "hello".to_string());
        // Registered under the right name but with the wrong type
        container.register("port", || "8080".to_string());

        let mut wiring = Wiring::default();
        container.resolve_into(&mut wiring).unwrap();

        assert!(wiring.greeting.is_some());
        assert!(wiring.port.is_none());
    }
}
