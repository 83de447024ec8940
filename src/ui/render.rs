use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use super::components::{
	OutputContext, ProgressState, PromptContext, badge_rows, render_badges, render_buttons,
	render_output, render_prompt, render_suggestions,
};

const MAX_SUGGESTION_ROWS: u16 = 8;
const LOG_PANE_HEIGHT: u16 = 8;
const KEY_HINTS: &str =
	"Enter/Tab select  Ctrl+G combine  Ctrl+S download  Ctrl+X remove  Ctrl+L logs  Esc quit";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let suggestion_rows = u16::try_from(self.session.suggestions().len())
			.unwrap_or(u16::MAX)
			.min(MAX_SUGGESTION_ROWS);
		// One extra row for the list's top border.
		let suggestions_height = if suggestion_rows == 0 {
			0
		} else {
			suggestion_rows + 1
		};
		let logs_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
		let badges_height = badge_rows(self.session.selection().as_slice(), area.width);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(suggestions_height),
				Constraint::Length(badges_height),
				Constraint::Min(3),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(logs_height),
			])
			.split(area);

		self.render_prompt_row(frame, layout[0]);

		self.hits.suggestions = if suggestions_height == 0 {
			Rect::default()
		} else {
			render_suggestions(
				frame,
				layout[1],
				self.session.suggestions(),
				&mut self.suggestion_state,
				&self.theme,
			)
		};

		self.hits.badges = render_badges(
			frame,
			layout[2],
			self.session.selection().as_slice(),
			self.badge_focus,
			&self.theme,
		);

		self.hits.output = layout[3];
		render_output(
			frame,
			OutputContext {
				buffer: self.session.buffer(),
				scroll: self.output_scroll,
				area: layout[3],
				theme: &self.theme,
			},
		);
		self.hits.buttons = render_buttons(
			frame,
			layout[4],
			self.session.buffer().is_downloadable(),
			&self.theme,
		);

		self.render_status(frame, layout[5]);
		if self.show_logs {
			self.render_logs(frame, layout[6]);
		}
	}

	fn render_prompt_row(&self, frame: &mut Frame, area: Rect) {
		let status = self.progress_status();
		render_prompt(
			frame,
			PromptContext {
				input: &self.input,
				input_title: self.input_title.as_deref(),
				area,
				theme: &self.theme,
			},
			ProgressState {
				label: &status.label,
				busy: status.busy,
				failed: status.failed,
				throbber_state: &self.throbber_state,
			},
		);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let status = match self.session.status() {
			Some(message) => Paragraph::new(message).style(self.theme.highlight_style()),
			None => Paragraph::new(KEY_HINTS).style(self.theme.empty_style()),
		};
		frame.render_widget(status, area);
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::TOP)
					.title(" Log ")
					.border_style(self.theme.empty_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style_error(self.theme.error_style())
			.style_warn(self.theme.highlight_style())
			.style_info(self.theme.prompt_style())
			.style_debug(self.theme.empty_style());
		frame.render_widget(widget, area);
	}
}
