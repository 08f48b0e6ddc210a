use derive_new::new;

#[derive(Debug, new)]
pub struct CreateAmenity {
    pub name: String,
}
