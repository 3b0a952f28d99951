//! In-memory repository fakes plus row builders for service tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry, TeamMoodReport};
use crate::models::resource::{NewResource, Resource};
use crate::repositories::{
    EmployeeRepository, FavoriteRepository, MoodEntryRepository, RepoError, ResourceRepository,
};

pub fn employee(id: i64, role_id: i64, team_id: i64) -> Employee {
    Employee {
        id,
        name: format!("Employee {id}"),
        email: format!("employee{id}@humanize.test"),
        password: "secret".into(),
        hired_on: "2022-03-01".parse().unwrap(),
        team_id,
        role_id,
    }
}

pub fn new_employee(email: &str) -> NewEmployee {
    NewEmployee {
        name: "New Hire".into(),
        email: email.into(),
        password: "secret".into(),
        hired_on: "2023-01-02".parse().unwrap(),
        team_id: 1,
        role_id: 1,
    }
}

pub fn new_entry(employee_id: i64, checkin_date: NaiveDate, energy_level: i32) -> NewMoodEntry {
    NewMoodEntry {
        employee_id,
        checkin_date,
        energy_level,
        feeling: "focused".into(),
        demand_volume: "manageable".into(),
        blockers: None,
        work_life_disconnect: "yes".into(),
        connection_level: 3,
        interaction_quality: "good".into(),
        sleep_quality: "ok".into(),
        pause_status: "took breaks".into(),
        small_win: None,
    }
}

pub fn resource(id: i64, name: &str) -> Resource {
    Resource {
        id,
        name: name.into(),
        kind: "article".into(),
        url: format!("https://humanize.test/resources/{id}"),
    }
}

fn entry_from(id: i64, new: &NewMoodEntry) -> MoodEntry {
    MoodEntry {
        id,
        employee_id: new.employee_id,
        checkin_date: new.checkin_date,
        energy_level: new.energy_level,
        feeling: new.feeling.clone(),
        demand_volume: new.demand_volume.clone(),
        blockers: new.blockers.clone(),
        work_life_disconnect: new.work_life_disconnect.clone(),
        connection_level: new.connection_level,
        interaction_quality: new.interaction_quality.clone(),
        sleep_quality: new.sleep_quality.clone(),
        pause_status: new.pause_status.clone(),
        small_win: new.small_win.clone(),
    }
}

pub struct InMemoryEmployees {
    rows: Mutex<Vec<Employee>>,
    next_id: AtomicI64,
}

impl InMemoryEmployees {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(rows: Vec<Employee>) -> Self {
        let next_id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub async fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub async fn get(&self, id: i64) -> Option<Employee> {
        self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn insert(&self, new: &NewEmployee) -> Result<Employee, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.email == new.email) {
            return Err(RepoError::Duplicate);
        }
        let employee = Employee {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new.name.clone(),
            email: new.email.clone(),
            password: new.password.clone(),
            hired_on: new.hired_on,
            team_id: new.team_id,
            role_id: new.role_id,
        };
        rows.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepoError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn update(&self, employee: &EmployeeUpdate) -> Result<Option<Employee>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|e| e.id == employee.id) {
            Some(row) => {
                row.name = employee.name.clone();
                row.email = employee.email.clone();
                row.password = employee.password.clone();
                row.hired_on = employee.hired_on;
                row.team_id = employee.team_id;
                row.role_id = employee.role_id;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

pub struct InMemoryMoodEntries {
    rows: Mutex<Vec<MoodEntry>>,
    reports: Mutex<Vec<TeamMoodReport>>,
    next_id: AtomicI64,
    // When set, lookups pretend the table is empty so the read-then-write
    // race window can be exercised.
    hide_from_lookup: AtomicBool,
}

impl InMemoryMoodEntries {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            reports: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            hide_from_lookup: AtomicBool::new(false),
        }
    }

    pub async fn seed(&self, new: NewMoodEntry) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(entry_from(id, &new));
    }

    pub async fn set_team_averages(&self, reports: Vec<TeamMoodReport>) {
        *self.reports.lock().unwrap() = reports;
    }

    pub fn simulate_lost_race(&self) {
        self.hide_from_lookup.store(true, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<MoodEntry> {
        self.rows.lock().unwrap().clone()
    }

    pub async fn for_employee(&self, employee_id: i64) -> Vec<MoodEntry> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MoodEntryRepository for InMemoryMoodEntries {
    async fn insert(&self, new: &NewMoodEntry) -> Result<MoodEntry, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.employee_id == new.employee_id && e.checkin_date == new.checkin_date)
        {
            return Err(RepoError::Duplicate);
        }
        let entry = entry_from(self.next_id.fetch_add(1, Ordering::SeqCst), new);
        rows.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<Option<MoodEntry>, RepoError> {
        if self.hide_from_lookup.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.employee_id == employee_id && e.checkin_date == date)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<MoodEntry>, RepoError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.checkin_date.cmp(&a.checkin_date));
        Ok(rows)
    }

    async fn team_averages(&self) -> Result<Vec<TeamMoodReport>, RepoError> {
        Ok(self.reports.lock().unwrap().clone())
    }

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.employee_id != employee_id);
        Ok((before - rows.len()) as u64)
    }
}

pub struct InMemoryFavorites {
    links: Mutex<Vec<(i64, i64)>>,
    resources: Mutex<Vec<Resource>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            resources: Mutex::new(Vec::new()),
        }
    }

    pub async fn seed_link(&self, employee_id: i64, resource_id: i64) {
        self.links.lock().unwrap().push((employee_id, resource_id));
    }

    pub async fn seed_resource(&self, resource: Resource) {
        self.resources.lock().unwrap().push(resource);
    }

    pub async fn links_for(&self, employee_id: i64) -> Vec<(i64, i64)> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == employee_id)
            .copied()
            .collect()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavorites {
    async fn link(&self, employee_id: i64, resource_id: i64) -> Result<(), RepoError> {
        let mut links = self.links.lock().unwrap();
        if links.contains(&(employee_id, resource_id)) {
            return Err(RepoError::Duplicate);
        }
        links.push((employee_id, resource_id));
        Ok(())
    }

    async fn unlink(&self, employee_id: i64, resource_id: i64) -> Result<bool, RepoError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|pair| *pair != (employee_id, resource_id));
        Ok(links.len() < before)
    }

    async fn list_for_employee(&self, employee_id: i64) -> Result<Vec<Resource>, RepoError> {
        let links = self.links.lock().unwrap();
        let resources = self.resources.lock().unwrap();
        let mut listed: Vec<Resource> = resources
            .iter()
            .filter(|r| links.contains(&(employee_id, r.id)))
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|(e, _)| *e != employee_id);
        Ok((before - links.len()) as u64)
    }
}

pub struct InMemoryResources {
    rows: Mutex<Vec<Resource>>,
    next_id: AtomicI64,
}

impl InMemoryResources {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResources {
    async fn insert(&self, new: &NewResource) -> Result<Resource, RepoError> {
        let resource = Resource {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new.name.clone(),
            kind: new.kind.clone(),
            url: new.url.clone(),
        };
        self.rows.lock().unwrap().push(resource.clone());
        Ok(resource)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Resource>, RepoError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn update(&self, resource: &Resource) -> Result<Option<Resource>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == resource.id) {
            Some(row) => {
                *row = resource.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}
