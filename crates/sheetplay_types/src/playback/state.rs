//! The playback cursor and its timing state machine.

use log::{debug, trace, warn};

use crate::sheet::{Direction, Frame, Sheet};

use super::{cursor::TagCursor, error::PlaybackError};

/// Reference to a tag by name or by id.
///
/// # Examples
///
/// ```
/// use sheetplay_types::playback::TagRef;
///
/// assert_eq!(TagRef::from("walk"), TagRef::Name("walk"));
/// assert_eq!(TagRef::from(2), TagRef::Id(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRef<'n> {
	/// First tag with this name
	Name(&'n str),
	/// Tag at this index
	Id(usize),
}

impl<'n> From<&'n str> for TagRef<'n> {
	fn from(name: &'n str) -> Self {
		Self::Name(name)
	}
}

impl<'n> From<&'n String> for TagRef<'n> {
	fn from(name: &'n String) -> Self {
		Self::Name(name.as_str())
	}
}

impl From<usize> for TagRef<'_> {
	fn from(id: usize) -> Self {
		Self::Id(id)
	}
}

/// Whether playback is confined to a tag's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
	/// Sweep every frame of the sheet in index order, wrapping to frame 0
	Unscoped,
	/// Follow the rules of one tag
	TagScoped {
		/// Id of the active tag
		tag_id: usize,
	},
}

/// Outcome of a single step of the play-head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
	Moved,
	Rearmed,
	HandedOff,
}

/// Everything that decides where the play-head goes next, apart from the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
	mode: PlaybackMode,
	tag: Option<TagCursor>,
	frame: usize,
	direction: Direction,
}

/// Play-head over a borrowed [`Sheet`].
///
/// A `Playback` holds the current frame, the time spent on it, the direction of
/// travel and the working copy of the active tag. The sheet is never modified;
/// many playbacks can share one sheet.
///
/// # State Machine
///
/// Each call to [`advance`](Self::advance) adds the scaled elapsed time to the
/// frame timer. While the timer covers the duration of the frame being shown,
/// that duration is subtracted (leftover time carries into the next frame) and
/// the play-head steps once:
///
/// - **Unscoped:** next index, wrapping to 0. Landing on the `from_frame` of a
///   pending tag re-enters tag mode at that tag's start frame.
/// - **Tag-scoped:** one frame in the current direction. Stepping past an edge
///   either bounces (ping-pong, re-entering one frame in from the edge) or
///   wraps to the other end and consumes one repeat. When a non-looping tag
///   runs out of repeats, the next tag in the sheet (wrapping to the first)
///   takes over if the frame after the exhausted range lies inside it;
///   otherwise playback continues unscoped from there.
///
/// A backlog of many whole cycles is reduced before stepping, so a single huge
/// delta costs about as much as a few passes through the active range.
///
/// # Examples
///
/// ```
/// use sheetplay_types::playback::Playback;
/// use sheetplay_types::sheet::{Frame, Sheet, Tag};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = (0..4).map(|_| Frame::with_duration(100)).collect();
/// let sheet = Sheet::new(frames, vec![Tag::new("walk", 1, 3)])?;
///
/// let mut playback = Playback::for_tag(&sheet, "walk")?;
/// assert_eq!(playback.current_frame(), 1);
///
/// assert_eq!(playback.advance(0.05), 1); // half a frame
/// assert_eq!(playback.advance(0.05), 2);
/// assert_eq!(playback.advance(0.2), 1); // 3, then wrap back to 1
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Playback<'s> {
	sheet: &'s Sheet,
	ready: bool,
	mode: PlaybackMode,
	tag: Option<TagCursor>,
	current_frame: usize,
	direction: Direction,
	timer_ms: f64,
	running: bool,
	speed: f32,
}

impl<'s> Playback<'s> {
	/// Plays every frame of the sheet in order, looping forever.
	pub fn simple(sheet: &'s Sheet) -> Self {
		Self {
			sheet,
			ready: true,
			mode: PlaybackMode::Unscoped,
			tag: None,
			current_frame: 0,
			direction: Direction::Forward,
			timer_ms: 0.0,
			running: true,
			speed: 1.0,
		}
	}

	/// Plays one tag, starting at its natural start frame.
	///
	/// # Errors
	///
	/// Returns an error if no tag matches the name, or the id is out of range.
	pub fn for_tag<'n>(
		sheet: &'s Sheet,
		tag: impl Into<TagRef<'n>>,
	) -> Result<Self, PlaybackError> {
		let found = match tag.into() {
			TagRef::Name(name) => sheet.find_tag_by_name(name).ok_or_else(|| {
				PlaybackError::TagNotFound {
					name: name.to_string(),
				}
			})?,
			TagRef::Id(id) => sheet.find_tag_by_id(id).ok_or(PlaybackError::TagOutOfRange {
				id,
				count: sheet.tag_count(),
			})?,
		};

		let cursor = TagCursor::from_tag(found);
		Ok(Self {
			sheet,
			ready: true,
			mode: PlaybackMode::TagScoped {
				tag_id: found.id,
			},
			tag: Some(cursor),
			current_frame: found.start_frame(),
			direction: found.direction,
			timer_ms: 0.0,
			running: true,
			speed: 1.0,
		})
	}

	/// Plays the first tag with the given name.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::TagNotFound`] if no tag has that name.
	pub fn for_tag_name(sheet: &'s Sheet, name: &str) -> Result<Self, PlaybackError> {
		Self::for_tag(sheet, TagRef::Name(name))
	}

	/// Plays the tag with the given id.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::TagOutOfRange`] if `id` is past the last tag.
	pub fn for_tag_id(sheet: &'s Sheet, id: usize) -> Result<Self, PlaybackError> {
		Self::for_tag(sheet, TagRef::Id(id))
	}

	/// Like [`for_tag`](Self::for_tag), but returns an idle playback on failure.
	///
	/// The idle playback reports `is_ready() == false`, stays on frame 0 and
	/// ignores every control call.
	pub fn for_tag_or_idle<'n>(sheet: &'s Sheet, tag: impl Into<TagRef<'n>>) -> Self {
		Self::for_tag(sheet, tag).unwrap_or_else(|err| {
			warn!("Creating idle playback: {}", err);
			Self::idle(sheet)
		})
	}

	fn idle(sheet: &'s Sheet) -> Self {
		Self {
			ready: false,
			running: false,
			..Self::simple(sheet)
		}
	}

	/// Returns the sheet this playback reads from.
	pub fn sheet(&self) -> &'s Sheet {
		self.sheet
	}

	/// Returns `false` for the idle playback produced by a failed tag lookup.
	pub fn is_ready(&self) -> bool {
		self.ready
	}

	/// Returns `true` while time advances the play-head.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Index of the frame to display.
	pub fn current_frame(&self) -> usize {
		self.current_frame
	}

	/// The frame to display.
	pub fn current_frame_data(&self) -> &'s Frame {
		&self.sheet.frames()[self.current_frame]
	}

	/// Current direction of travel.
	///
	/// Differs from the tag's declared direction after a ping-pong bounce or
	/// while the speed is negative.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Time already spent on the current frame, in milliseconds.
	pub fn timer_ms(&self) -> f64 {
		self.timer_ms
	}

	/// Speed multiplier.
	pub fn speed(&self) -> f32 {
		self.speed
	}

	/// Current playback mode.
	pub fn mode(&self) -> PlaybackMode {
		self.mode
	}

	/// Id of the active tag, `None` while unscoped.
	pub fn current_tag_id(&self) -> Option<usize> {
		match self.mode {
			PlaybackMode::TagScoped {
				tag_id,
			} => Some(tag_id),
			PlaybackMode::Unscoped => None,
		}
	}

	/// Working copy of the tag in play (or pending re-entry while unscoped).
	pub fn tag_cursor(&self) -> Option<&TagCursor> {
		self.tag.as_ref()
	}

	/// Passes left in the active tag, `None` while unscoped or looping.
	pub fn remaining_repeats(&self) -> Option<u32> {
		match self.mode {
			PlaybackMode::TagScoped { .. } => {
				self.tag.and_then(|cursor| cursor.remaining_repeats())
			}
			PlaybackMode::Unscoped => None,
		}
	}

	/// Sets the speed multiplier.
	///
	/// The magnitude scales elapsed time. The direction of travel is flipped
	/// whenever the sign changes, so a negative speed plays the current range
	/// backwards and setting another negative value keeps it that way.
	pub fn set_speed(&mut self, speed: f32) {
		if !self.ready {
			return;
		}

		if (speed < 0.0) != (self.speed < 0.0) {
			self.direction = self.direction.flipped();
		}
		self.speed = speed;
	}

	/// Resumes playback.
	pub fn play(&mut self) {
		if self.ready {
			self.running = true;
		}
	}

	/// Halts playback; the current frame and timer are kept.
	pub fn stop(&mut self) {
		if self.ready {
			self.running = false;
		}
	}

	/// Toggles between running and halted.
	pub fn pause(&mut self) {
		if self.ready {
			self.running = !self.running;
		}
	}

	/// Advances the play-head by `delta_seconds` of wall time.
	///
	/// Returns the index of the frame to display afterwards. Zero, negative or
	/// non-finite deltas, a zero speed and a halted playback leave the state
	/// untouched.
	pub fn advance(&mut self, delta_seconds: f32) -> usize {
		if !self.ready || !self.running || self.speed == 0.0 {
			return self.current_frame;
		}

		let elapsed_ms = delta_seconds * 1000.0 * self.speed.abs();
		if !(elapsed_ms.is_finite() && elapsed_ms > 0.0) {
			return self.current_frame;
		}

		self.timer_ms += f64::from(elapsed_ms);
		self.skip_whole_passes();

		// Hand-offs walk the tag list in order, so a chain that never settles
		// lands on the same position once per round.
		let mut round_start: Option<(Position, f64)> = None;
		loop {
			let duration = f64::from(self.current_frame_data().duration_ms());
			if self.timer_ms < duration {
				break;
			}
			self.timer_ms -= duration;

			match self.step() {
				Step::Moved => {}
				Step::Rearmed => self.skip_whole_passes(),
				Step::HandedOff => {
					let position = self.position();
					match round_start {
						Some((start, timer_at_start)) if start == position => {
							self.timer_ms %= timer_at_start - self.timer_ms;
							round_start = None;
						}
						Some(_) => {}
						None => round_start = Some((position, self.timer_ms)),
					}
					self.skip_whole_passes();
				}
			}
		}

		self.current_frame
	}

	fn position(&self) -> Position {
		Position {
			mode: self.mode,
			tag: self.tag,
			frame: self.current_frame,
			direction: self.direction,
		}
	}

	/// Time after which the play-head repeats its path, `None` when it is
	/// heading for a hand-off or a tag re-entry.
	///
	/// For a counted tag this is one pass through the range, which costs
	/// exactly one repeat.
	fn pass_ms(&self) -> Option<f64> {
		let frame_ms = |frame: usize| f64::from(self.sheet.frames()[frame].duration_ms());

		match (self.mode, self.tag) {
			(PlaybackMode::Unscoped, None) => Some(self.sheet.total_duration_ms() as f64),
			(PlaybackMode::Unscoped, Some(_)) | (PlaybackMode::TagScoped { .. }, None) => None,
			(PlaybackMode::TagScoped { .. }, Some(cursor)) => {
				let range_ms: f64 = (cursor.from_frame..=cursor.to_frame).map(frame_ms).sum();
				if !cursor.ping_pong {
					Some(range_ms)
				} else if cursor.from_frame < cursor.to_frame {
					// Both edge frames are shown once per round trip
					Some(2.0 * range_ms - frame_ms(cursor.from_frame) - frame_ms(cursor.to_frame))
				} else {
					// A single frame flips direction on every step
					Some(2.0 * range_ms)
				}
			}
		}
	}

	/// Drops whole passes from the timer.
	///
	/// One pass always stays, so a play-head that starts outside its
	/// repeating path (a ping-pong edge) still walks into it.
	fn skip_whole_passes(&mut self) {
		// A pass is never shorter than the frame on screen
		let frame_ms = f64::from(self.current_frame_data().duration_ms());
		if self.timer_ms < 2.0 * frame_ms {
			return;
		}
		let Some(pass_ms) = self.pass_ms() else {
			return;
		};
		if self.timer_ms < 2.0 * pass_ms {
			return;
		}

		if let Some(cursor) = self.tag.as_mut()
			&& !cursor.looping
			&& !cursor.ping_pong
		{
			// Keep the last repeat so the hand-off still happens by stepping
			let passes = ((self.timer_ms / pass_ms).floor() - 1.0)
				.min(f64::from(cursor.repeat.saturating_sub(1)));
			cursor.repeat -= passes as u32;
			self.timer_ms -= passes * pass_ms;
		} else {
			self.timer_ms = pass_ms + self.timer_ms % pass_ms;
		}
		trace!("Skipped whole passes, {:.3}ms left to step", self.timer_ms);
	}

	fn step(&mut self) -> Step {
		let step = match self.mode {
			PlaybackMode::TagScoped { .. } => self.step_in_tag(),
			PlaybackMode::Unscoped => self.step_unscoped(),
		};
		trace!("Stepped to frame {} ({:?})", self.current_frame, self.mode);
		step
	}

	fn step_unscoped(&mut self) -> Step {
		self.current_frame += 1;
		if self.current_frame >= self.sheet.frame_count() {
			self.current_frame = 0;
		}

		if let Some(cursor) = self.tag
			&& self.current_frame == cursor.from_frame
		{
			self.mode = PlaybackMode::TagScoped {
				tag_id: cursor.id,
			};
			self.current_frame = self.direction.start_of(cursor.from_frame, cursor.to_frame);
			debug!("Re-entered tag {} at frame {}", cursor.id, self.current_frame);
			return Step::Rearmed;
		}
		Step::Moved
	}

	fn step_in_tag(&mut self) -> Step {
		let Some(cursor) = self.tag.as_mut() else {
			self.mode = PlaybackMode::Unscoped;
			return Step::Moved;
		};

		let at_edge = match self.direction {
			Direction::Forward => self.current_frame >= cursor.to_frame,
			Direction::Reverse => self.current_frame <= cursor.from_frame,
		};

		if !at_edge {
			match self.direction {
				Direction::Forward => self.current_frame += 1,
				Direction::Reverse => self.current_frame -= 1,
			}
			return Step::Moved;
		}

		if cursor.ping_pong {
			// Skip the edge frame so it is not shown twice in a row
			self.current_frame = match self.direction {
				Direction::Forward => cursor.to_frame.saturating_sub(1).max(cursor.from_frame),
				Direction::Reverse => (cursor.from_frame + 1).min(cursor.to_frame),
			};
			self.direction = self.direction.flipped();
			return Step::Moved;
		}

		self.current_frame = self.direction.start_of(cursor.from_frame, cursor.to_frame);
		cursor.consume_pass();
		if cursor.is_exhausted() {
			self.hand_off();
			return Step::HandedOff;
		}
		Step::Moved
	}

	fn hand_off(&mut self) {
		let Some(exhausted) = self.tag else {
			return;
		};

		let tags = self.sheet.tags();
		if tags.is_empty() {
			self.mode = PlaybackMode::Unscoped;
			self.tag = None;
			return;
		}

		let next_id = (exhausted.id + 1) % tags.len();
		let next = &tags[next_id];

		let mut provisional = exhausted.to_frame + 1;
		if provisional >= self.sheet.frame_count() {
			provisional = 0;
		}

		let cursor = TagCursor::from_tag(next);
		self.direction = if self.speed < 0.0 {
			next.direction.flipped()
		} else {
			next.direction
		};
		self.tag = Some(cursor);

		if next.contains(provisional) {
			self.mode = PlaybackMode::TagScoped {
				tag_id: next_id,
			};
			self.current_frame = self.direction.start_of(cursor.from_frame, cursor.to_frame);
			debug!(
				"Tag {} exhausted, continuing with tag \"{}\" at frame {}",
				exhausted.id, next.name, self.current_frame
			);
		} else {
			self.mode = PlaybackMode::Unscoped;
			self.current_frame = provisional;
			debug!(
				"Tag {} exhausted, frame {} is outside tag \"{}\", continuing unscoped",
				exhausted.id, provisional, next.name
			);
		}
	}
}
