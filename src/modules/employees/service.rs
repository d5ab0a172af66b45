use boarding_core::{AppResult, ListQuery, Paginated};
use boarding_models::{
    CreateEmployeeDto, EmployeeDetail, EmployeeFilterParams, HasProfile, Staff, Teacher,
    UpdateEmployeeDto,
};
use tracing::instrument;

use crate::entity::Entity;
use crate::populate::DetailPopulator;
use crate::repository::Repository;

/// Staff and teacher operations. Reads come back as detail views with their
/// reference ids resolved; writes return the stored record.
pub struct EmployeeService<T: Entity> {
    repository: Repository<T>,
    populator: DetailPopulator,
}

pub type StaffService = EmployeeService<Staff>;
pub type TeacherService = EmployeeService<Teacher>;

impl<T: Entity> Clone for EmployeeService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            populator: self.populator.clone(),
        }
    }
}

impl<T: Entity> std::fmt::Debug for EmployeeService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl<T> EmployeeService<T>
where
    T: Entity<Create = CreateEmployeeDto, Update = UpdateEmployeeDto, Filter = EmployeeFilterParams>
        + HasProfile,
{
    pub fn new(repository: Repository<T>, populator: DetailPopulator) -> Self {
        Self {
            repository,
            populator,
        }
    }

    pub fn repository(&self) -> &Repository<T> {
        &self.repository
    }

    /// One page of detail views. The reference collections are loaded once
    /// for the whole page, alongside the page itself.
    #[instrument(skip_all, fields(entity = T::NAME))]
    pub async fn list(
        &self,
        query: ListQuery<EmployeeFilterParams>,
    ) -> AppResult<Paginated<EmployeeDetail<T>>> {
        let (page, lookups) = tokio::try_join!(self.repository.list(query), self.populator.load())?;
        Ok(page.map(|record| lookups.employee_detail(record)))
    }

    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn get_by_id(&self, id: &str) -> AppResult<EmployeeDetail<T>> {
        let (record, lookups) =
            tokio::try_join!(self.repository.get_by_id(id), self.populator.load())?;
        Ok(lookups.employee_detail(record))
    }

    pub async fn create(&self, dto: CreateEmployeeDto) -> AppResult<T> {
        self.repository.create(dto).await
    }

    pub async fn update(&self, id: &str, dto: UpdateEmployeeDto) -> AppResult<T> {
        self.repository.update(id, dto).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn get_all_for_dropdown(&self) -> AppResult<Vec<T>> {
        self.repository.get_all_for_dropdown().await
    }
}
