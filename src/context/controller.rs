//! Type-erased handle to the controller under test.

use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

/// Identity of a controller type.
#[derive(Debug, Clone, Copy)]
pub struct ControllerType {
    name: &'static str,
    id: TypeId,
}

impl ControllerType {
    /// Describes the controller type `C`.
    pub fn of<C: Any>() -> Self {
        Self {
            name: std::any::type_name::<C>(),
            id: TypeId::of::<C>(),
        }
    }

    /// Fully qualified type name, e.g. `my_app::controller::HomeController`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path, e.g. `HomeController`.
    pub fn short_name(&self) -> &'static str {
        // Generic arguments may contain `::` themselves
        let base = self.name.split('<').next().unwrap_or(self.name);
        let start = base.rfind("::").map(|i| i + 2).unwrap_or(0);
        &self.name[start..]
    }

    /// Whether this is the type `C`.
    pub fn is<C: Any>(&self) -> bool {
        self.id == TypeId::of::<C>()
    }
}

impl PartialEq for ControllerType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ControllerType {}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Shared reference to the controller instance under test.
///
/// The invocation harness keeps its own `Arc` to the controller; the context only holds another
/// reference to it and never owns the controller exclusively.
#[derive(Clone)]
pub struct ControllerHandle {
    instance: Arc<dyn Any + Send + Sync>,
    controller_type: ControllerType,
}

impl ControllerHandle {
    /// Wraps an already shared controller.
    pub fn new<C: Any + Send + Sync>(controller: Arc<C>) -> Self {
        Self {
            instance: controller,
            controller_type: ControllerType::of::<C>(),
        }
    }

    /// Type of the wrapped controller.
    pub fn controller_type(&self) -> ControllerType {
        self.controller_type
    }

    /// Borrows the controller as `C`, or `None` when it is another type.
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        self.instance.downcast_ref::<C>()
    }

    /// Clones the shared reference as `Arc<C>`, or `None` when it is another type.
    pub fn downcast_arc<C: Any + Send + Sync>(&self) -> Option<Arc<C>> {
        self.instance.clone().downcast::<C>().ok()
    }
}

impl fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerHandle")
            .field("controller_type", &self.controller_type.name())
            .finish()
    }
}
