pub mod health;
pub mod tasks;
pub mod users;

pub use health::health_check;
pub use tasks::{
    create_my_task, create_task, delete_task, delete_task_counted, get_task, list_my_tasks,
    list_tasks, update_task,
};
pub use users::{create_user, list_users};
