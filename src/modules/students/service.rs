use boarding_core::{AppResult, ListQuery, Paginated};
use boarding_models::{
    CreateStudentDto, Student, StudentDetail, StudentFilterParams, StudentOption, UpdateStudentDto,
};
use tracing::instrument;

use crate::populate::DetailPopulator;
use crate::repository::Repository;

#[derive(Debug, Clone)]
pub struct StudentService {
    repository: Repository<Student>,
    populator: DetailPopulator,
}

impl StudentService {
    pub fn new(repository: Repository<Student>, populator: DetailPopulator) -> Self {
        Self {
            repository,
            populator,
        }
    }

    pub fn repository(&self) -> &Repository<Student> {
        &self.repository
    }

    pub async fn list(&self, query: ListQuery<StudentFilterParams>) -> AppResult<Paginated<Student>> {
        self.repository.list(query).await
    }

    /// Like [`list`](Self::list), with gender, blood group and religion resolved.
    #[instrument(skip_all)]
    pub async fn list_details(
        &self,
        query: ListQuery<StudentFilterParams>,
    ) -> AppResult<Paginated<StudentDetail>> {
        let (page, lookups) = tokio::try_join!(self.repository.list(query), self.populator.load())?;
        Ok(page.map(|student| lookups.student_detail(student)))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Student> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_detail_by_id(&self, id: &str) -> AppResult<StudentDetail> {
        let (student, lookups) =
            tokio::try_join!(self.repository.get_by_id(id), self.populator.load())?;
        Ok(lookups.student_detail(student))
    }

    pub async fn create(&self, dto: CreateStudentDto) -> AppResult<Student> {
        self.repository.create(dto).await
    }

    pub async fn update(&self, id: &str, dto: UpdateStudentDto) -> AppResult<Student> {
        self.repository.update(id, dto).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    /// `{id, firstName, lastName}` for every student, in store order.
    pub async fn get_all_students_for_dropdown(&self) -> AppResult<Vec<StudentOption>> {
        let students = self.repository.get_all_for_dropdown().await?;
        Ok(students.iter().map(StudentOption::from).collect())
    }
}
