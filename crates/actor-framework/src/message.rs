//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`.
///
/// The variants map to the CRUD lifecycle of a resource plus two extensions:
///
/// - **Create / Get / Update / Delete**: standard lifecycle.
/// - **List**: snapshot of every stored entity, in no particular order.
/// - **Action**: one resource-specific [`ActorEntity::Action`] on one entity.
/// - **Transact**: an ordered list of actions applied all-or-nothing.
///
/// The enum is generic over `T: ActorEntity`, so a "Product Create" payload can't be sent to
/// an "Order" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Results are returned in the same order as `ops`.
    Transact {
        ops: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
}
