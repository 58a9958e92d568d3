use crate::domain::{Company, NewCompany};
use crate::dto::CompanyDto;

pub struct CompanyMapper;

impl CompanyMapper {
    pub fn to_dto(company: &Company) -> CompanyDto {
        CompanyDto {
            id: Some(company.id),
            name: Some(company.name.clone()),
            address: company.address.clone(),
            cif: Some(company.cif.clone()),
            telephone: company.telephone.clone(),
            email: company.email.clone(),
            login: Some(company.login.clone()),
            password: None,
        }
    }

    /// Build an insert input; the DTO id is dropped. Missing required fields
    /// become empty strings and are rejected by validation.
    pub fn to_entity(dto: CompanyDto) -> NewCompany {
        NewCompany {
            cif: dto.cif.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            telephone: dto.telephone,
            email: dto.email,
            address: dto.address,
            login: dto.login.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        }
    }

    pub fn to_dto_list(companies: &[Company]) -> Vec<CompanyDto> {
        companies.iter().map(Self::to_dto).collect()
    }

    /// Partial update: copy the non-null name and address. Every other
    /// column keeps its stored value.
    pub fn update_entity_from_dto(dto: &CompanyDto, company: &mut Company) {
        if let Some(name) = &dto.name {
            company.name = name.clone();
        }
        if let Some(address) = &dto.address {
            company.address = Some(address.clone());
        }
    }
}
