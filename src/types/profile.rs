// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A learner's running accuracy for the current session.
#[derive(Clone, Debug)]
pub struct LearnerProfile {
    name: String,
    correct_count: u32,
    attempt_count: u32,
}

impl LearnerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            correct_count: 0,
            attempt_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_attempt(&mut self, was_correct: bool) {
        self.attempt_count += 1;
        if was_correct {
            self.correct_count += 1;
        }
    }

    /// Returns `(correct, attempts)`.
    pub fn accuracy_summary(&self) -> (u32, u32) {
        (self.correct_count, self.attempt_count)
    }

    /// The fraction of correct answers, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempt_count == 0 {
            None
        } else {
            Some(self.correct_count as f64 / self.attempt_count as f64)
        }
    }
}
