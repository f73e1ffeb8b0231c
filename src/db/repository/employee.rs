//! Employee Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "employee";
const PREFIX: char = 'E';

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all employees ordered by display id
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY display_id")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id(TABLE, id)?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Find employee by phone number
    pub async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Employee>> {
        let phone_owned = phone.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE phone = $phone LIMIT 1")
            .bind(("phone", phone_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // Check duplicate phone (admin front-end rule)
        if self.find_by_phone(&data.phone).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with phone '{}' already exists",
                data.phone
            )));
        }

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let employee = Employee {
            id: None,
            display_id,
            name: data.name,
            email: data.email,
            position: data.position,
            phone: data.phone,
            address: data.address,
            basic_salary: data.basic_salary,
        };

        let created: Option<Employee> = self.base.db().create(TABLE).content(employee).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee (display_id immutable)
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate phone if changing
        if let Some(ref new_phone) = data.phone {
            if new_phone != &existing.phone && self.find_by_phone(new_phone).await?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Employee with phone '{}' already exists",
                    new_phone
                )));
            }
        }

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Employee> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
