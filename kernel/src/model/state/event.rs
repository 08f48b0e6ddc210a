use derive_new::new;

#[derive(Debug, new)]
pub struct CreateState {
    pub name: String,
}
