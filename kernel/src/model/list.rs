use derive_new::new;

/// Window into a listing, already converted from page/number query values.
#[derive(Debug, Clone, Copy, new)]
pub struct PageOptions {
    pub limit: i64,
    pub offset: i64,
}
