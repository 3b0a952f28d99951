use std::env;

use crate::services::AccessPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    // Distinguished role ids, resolved once at startup. Defaults match the
    // seed data; override the env vars if the roles table is renumbered.
    pub hr_role_id: i64,
    pub tech_lead_role_id: i64,
    pub manager_role_id: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            hr_role_id: env::var("HR_ROLE_ID")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .expect("HR_ROLE_ID must be a number"),
            tech_lead_role_id: env::var("TECH_LEAD_ROLE_ID")
                .unwrap_or_else(|_| "3".into())
                .parse()
                .expect("TECH_LEAD_ROLE_ID must be a number"),
            manager_role_id: env::var("MANAGER_ROLE_ID")
                .unwrap_or_else(|_| "4".into())
                .parse()
                .expect("MANAGER_ROLE_ID must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.hr_role_id, self.tech_lead_role_id, self.manager_role_id)
    }
}
