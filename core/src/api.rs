/// SigningCredential is the trait used by clients to decide whether a
/// credential can sign requests at all.
///
/// Clients check this before building any request. A credential that is not
/// valid means the operation is unavailable, which is not an error.
pub trait SigningCredential: Clone + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}
