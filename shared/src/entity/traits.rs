use sea_orm::{DatabaseConnection, DbErr};

/// common interface for entities keyed by a unique national tax id,
/// such as individual customers (CPF) and company customers (CNPJ)
///
/// uniqueness is scoped to the entity, a CPF and a CNPJ never collide
pub trait TaxIdScoped {
    /// The model of the entity that is returned by the query
    type Model;

    fn find_by_tax_id(
        tax_id: &str,
        db: &DatabaseConnection,
    ) -> impl std::future::Future<Output = Result<Option<Self::Model>, DbErr>> + Send;

    fn tax_id_in_use(
        tax_id: &str,
        db: &DatabaseConnection,
    ) -> impl std::future::Future<Output = Result<bool, DbErr>> + Send;

    /// `true` if the tax id is used by a record other than `id`,
    /// for uniqueness checks on update
    fn tax_id_in_use_by_another(
        tax_id: &str,
        id: i32,
        db: &DatabaseConnection,
    ) -> impl std::future::Future<Output = Result<bool, DbErr>> + Send;
}
