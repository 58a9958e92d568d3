use crate::domain::{Product, ProductDraft};
use crate::dto::ProductDto;

pub struct ProductMapper;

impl ProductMapper {
    /// `companyId`/`companyName` come from the resolved relation.
    pub fn to_dto(product: &Product) -> ProductDto {
        ProductDto {
            id: Some(product.id),
            name: product.name.clone(),
            stock: product.stock,
            price: product.price,
            company_id: Some(product.company.id),
            company_name: Some(product.company.name.clone()),
        }
    }

    /// Scalar fields only. `companyId` and `companyName` are ignored here.
    pub fn to_entity(dto: ProductDto) -> ProductDraft {
        ProductDraft { name: dto.name, stock: dto.stock, price: dto.price }
    }

    pub fn to_dto_list(products: &[Product]) -> Vec<ProductDto> {
        products.iter().map(Self::to_dto).collect()
    }

    /// Partial update of name/stock/price. Relation changes are handled by the service.
    pub fn update_entity_from_dto(dto: &ProductDto, product: &mut Product) {
        if let Some(name) = &dto.name {
            product.name = Some(name.clone());
        }
        if let Some(stock) = dto.stock {
            product.stock = Some(stock);
        }
        if let Some(price) = dto.price {
            product.price = Some(price);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Company;

    fn owner() -> Company {
        Company {
            id: 3,
            cif: "B00000003".into(),
            name: "Acme".into(),
            telephone: None,
            email: None,
            address: None,
            login: "acme".into(),
            password: "pw".into(),
        }
    }

    fn widget() -> Product {
        Product { id: 10, name: Some("Widget".into()), stock: Some(5), price: Some(12.5), company: owner() }
    }

    #[test]
    fn to_dto_fills_company_fields() {
        let dto = ProductMapper::to_dto(&widget());
        assert_eq!(dto.company_id, Some(3));
        assert_eq!(dto.company_name.as_deref(), Some("Acme"));
        assert_eq!(dto.price, Some(12.5));
    }

    #[test]
    fn round_trip_preserves_scalars_and_drops_relation() {
        let p = widget();
        let draft = ProductMapper::to_entity(ProductMapper::to_dto(&p));
        assert_eq!(draft, ProductDraft { name: p.name.clone(), stock: p.stock, price: p.price });
        // the company id only comes back when the service attaches it
        assert_eq!(draft.attach(42).company_id, 42);
    }

    #[test]
    fn partial_update_with_only_stock() {
        let mut p = widget();
        let dto = ProductDto { stock: Some(0), ..Default::default() };
        ProductMapper::update_entity_from_dto(&dto, &mut p);
        assert_eq!(p.stock, Some(0));
        assert_eq!(p.name.as_deref(), Some("Widget"));
        assert_eq!(p.price, Some(12.5));
    }

    #[test]
    fn partial_update_ignores_company_id() {
        let mut p = widget();
        let dto = ProductDto { company_id: Some(99), company_name: Some("Other".into()), ..Default::default() };
        ProductMapper::update_entity_from_dto(&dto, &mut p);
        assert_eq!(p, widget());
    }
}
