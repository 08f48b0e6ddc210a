use crate::model::id::StateId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateCity {
    pub name: String,
    pub state_id: StateId,
}
