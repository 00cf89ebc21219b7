//! Mapping from action type to action constructor.
//!
//! The mapping is an explicit `match` with an arm per enum member, so adding
//! a member without deciding whether it is executable fails to compile.
//! Unmapped members resolve to `None`, which the executor reports as an
//! unsupported action.

use crate::action::Action;
use crate::action_type::ActionType;
use crate::actions::{GetKeyDescription, ImportKey, ListKeys};

/// Builds a fresh action instance. Constructors perform no I/O.
pub type ActionConstructor<Q> = fn() -> Box<dyn Action<Q>>;

/// Registry of executable action types.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionRegistry;

impl ActionRegistry {
    /// Creates the registry.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the constructor for an action type, or `None` when the type is
    /// not executable.
    #[must_use]
    pub fn resolve<Q>(&self, action_type: ActionType) -> Option<ActionConstructor<Q>>
    where
        Q: ?Sized,
    {
        match action_type {
            ActionType::GetKeyDescription => Some(construct::<GetKeyDescription, Q>),
            ActionType::ListKeys => Some(construct::<ListKeys, Q>),
            ActionType::ImportKey => Some(construct::<ImportKey, Q>),
            ActionType::EncryptSign | ActionType::DecryptVerify => None,
        }
    }

    /// Parses a raw identifier and resolves it.
    ///
    /// Returns `None` both for identifiers outside [`ActionType`] and for
    /// members without a mapping.
    #[must_use]
    pub fn lookup<Q>(&self, action: &str) -> Option<(ActionType, ActionConstructor<Q>)>
    where
        Q: ?Sized,
    {
        let action_type = ActionType::parse(action)?;
        self.resolve(action_type)
            .map(|constructor| (action_type, constructor))
    }

    /// Returns `true` when the identifier names an executable action.
    #[must_use]
    pub fn supports(&self, action: &str) -> bool {
        self.lookup::<()>(action).is_some()
    }

    /// Lists the executable action types.
    pub fn supported(&self) -> impl Iterator<Item = ActionType> + '_ {
        ActionType::ALL
            .into_iter()
            .filter(|action_type| self.resolve::<()>(*action_type).is_some())
    }
}

fn construct<A, Q>() -> Box<dyn Action<Q>>
where
    A: Action<Q> + Default + 'static,
    Q: ?Sized,
{
    Box::new(A::default())
}
