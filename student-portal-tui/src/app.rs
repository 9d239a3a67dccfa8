use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的后台请求
        while let Some(result) = backend.try_recv() {
            if let Some(cmd) = update::update(app, AppMessage::Backend(result)) {
                backend.dispatch(cmd);
            }
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);

            // 5. 更新状态，需要时发出请求
            if let Some(cmd) = update::update(app, msg) {
                backend.dispatch(cmd);
            }
        }
    }

    Ok(())
}
