// SPDX-License-Identifier: MPL-2.0

fn main() -> iced::Result {
    iced_dex::app::run()
}
