//! 后台请求执行器

use anyhow::Result;
use student_portal_core::StudentService;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Command;
use crate::message::BackendEvent;

/// 持有运行时和结果通道
pub struct Backend {
    runtime: Runtime,
    service: StudentService,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    /// 创建后台执行器
    pub fn new(service: StudentService) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("student-portal-io")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            service,
            tx,
            rx,
        })
    }

    /// 异步执行请求，不阻塞 UI 线程
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {command:?}");

        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let event = execute(&service, command).await;
            if tx.send(event).is_err() {
                log::debug!("UI loop is gone, dropping backend event");
            }
        });
    }

    /// 取出一个已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.rx.try_recv().ok()
    }
}

/// 执行单个请求并包装结果
pub async fn execute(service: &StudentService, command: Command) -> BackendEvent {
    match command {
        Command::FetchStudents => BackendEvent::StudentsLoaded(service.list().await),
        Command::CreateStudent { name } => BackendEvent::StudentCreated(service.create(&name).await),
        Command::UpdateStudent { id, name } => {
            BackendEvent::StudentUpdated(service.update(&id, &name).await)
        }
        Command::DeleteStudent { id } => BackendEvent::StudentDeleted(service.delete(&id).await),
    }
}
