use crate::di::Container;

/// Builder for wiring a container at the composition root.
///
/// # Example
/// ```
/// use portside::di::ContainerBuilder;
///
/// let container = ContainerBuilder::new()
///     .provide("answer", || 42u32)
///     .build();
///
/// assert_eq!(*container.get_as::<u32>("answer").unwrap(), 42);
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a named provider.
    pub fn provide<T, F>(self, name: impl Into<String>, provider: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.container.register(name, provider);
        self
    }

    /// Build the container.
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_wired_container() {
        let container = ContainerBuilder::new()
            .provide("greeting", || "hello".to_string())
            .provide("answer", || 42u32)
            .build();

        assert_eq!(container.len(), 2);
        assert_eq!(*container.get_as::<String>("greeting").unwrap(), "hello");
    }
}
