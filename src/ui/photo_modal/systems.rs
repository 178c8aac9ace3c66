// src/ui/photo_modal/systems.rs
//
// Systems for spawning the photo modal, reacting to its buttons, and
// applying show/hide signals from the viewer.

use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    prelude::*,
};

use crate::gallery::components::{GalleryCommand, PhotoModalSignal};

use super::components::{
    ModalControl, PhotoModalCounter, PhotoModalImage, PhotoModalRoot, PhotoModalSettings,
};

// Visual constants
const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
const BUTTON_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.85);
const BUTTON_DISABLED_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);
const BUTTON_BORDER_COLOR: Color = Color::srgb(0.55, 0.27, 0.07);
const GLYPH_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const COUNTER_COLOR: Color = Color::WHITE;

/// Spawns the hidden modal overlay with its photo, counter, and controls.
pub fn spawn_photo_modal(mut commands: Commands, settings: Res<PhotoModalSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(settings.gap),
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GlobalZIndex(100),
            PhotoModalRoot,
            Name::new("Photo Modal"),
        ))
        .with_children(|parent| {
            // Close button pinned to the top-right corner
            parent
                .spawn(control_button(ModalControl::Close, &settings))
                .insert(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(settings.close_offset),
                    right: Val::Px(settings.close_offset),
                    ..button_node(&settings)
                })
                .with_children(|button| {
                    button.spawn(control_glyph(ModalControl::Close, &settings));
                });

            // Previous / photo / next row
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(settings.gap),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(control_button(ModalControl::Previous, &settings))
                        .with_children(|button| {
                            button.spawn(control_glyph(ModalControl::Previous, &settings));
                        });

                    row.spawn((
                        ImageNode::default(),
                        Node {
                            max_width: Val::Vw(settings.photo_extent_percent.x),
                            max_height: Val::Vh(settings.photo_extent_percent.y),
                            ..default()
                        },
                        PhotoModalImage,
                    ));

                    row.spawn(control_button(ModalControl::Next, &settings))
                        .with_children(|button| {
                            button.spawn(control_glyph(ModalControl::Next, &settings));
                        });
                });

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.counter_font_size,
                    ..default()
                },
                TextColor(COUNTER_COLOR),
                PhotoModalCounter,
            ));
        });
}

fn button_node(settings: &PhotoModalSettings) -> Node {
    Node {
        width: Val::Px(settings.button_size),
        height: Val::Px(settings.button_size),
        border: UiRect::all(Val::Px(2.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn control_button(control: ModalControl, settings: &PhotoModalSettings) -> impl Bundle {
    (
        button_node(settings),
        Button,
        Interaction::None,
        BackgroundColor(BUTTON_COLOR),
        BorderColor::all(BUTTON_BORDER_COLOR),
        control,
        Name::new(format!("Photo Modal {:?} Button", control)),
    )
}

fn control_glyph(control: ModalControl, settings: &PhotoModalSettings) -> impl Bundle {
    (
        Text::new(control.glyph()),
        TextFont {
            font_size: settings.button_font_size,
            ..default()
        },
        TextColor(GLYPH_COLOR),
    )
}

/// Turns button presses into viewer commands.
#[allow(clippy::type_complexity)]
pub fn handle_modal_buttons(
    buttons: Query<(&Interaction, &ModalControl), (Changed<Interaction>, With<Button>)>,
    mut commands: MessageWriter<GalleryCommand>,
) {
    for (interaction, control) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            commands.write(control.command());
        }
    }
}

/// Shows, updates, or hides the overlay as the viewer changes.
#[allow(clippy::type_complexity)]
pub fn apply_modal_signals(
    mut signals: MessageReader<PhotoModalSignal>,
    asset_server: Res<AssetServer>,
    mut roots: Query<&mut Node, With<PhotoModalRoot>>,
    mut images: Query<&mut ImageNode, With<PhotoModalImage>>,
    mut counters: Query<&mut Text, With<PhotoModalCounter>>,
    mut controls: Query<(&ModalControl, &mut BackgroundColor)>,
) {
    for signal in signals.read() {
        match signal {
            PhotoModalSignal::Show {
                photo,
                index,
                count,
            } => {
                for mut node in roots.iter_mut() {
                    node.display = Display::Flex;
                }
                for mut image in images.iter_mut() {
                    image.image = asset_server.load(photo.clone());
                }
                for mut text in counters.iter_mut() {
                    text.0 = format!("{} / {}", index + 1, count);
                }
                for (control, mut background) in controls.iter_mut() {
                    background.0 = if control.enabled(*index, *count) {
                        BUTTON_COLOR
                    } else {
                        BUTTON_DISABLED_COLOR
                    };
                }
            }
            PhotoModalSignal::Hide => {
                for mut node in roots.iter_mut() {
                    node.display = Display::None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn modal_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .init_resource::<PhotoModalSettings>()
            .add_message::<PhotoModalSignal>()
            .add_systems(Startup, spawn_photo_modal)
            .add_systems(Update, apply_modal_signals);
        app
    }

    fn send(app: &mut App, signal: PhotoModalSignal) {
        app.world_mut()
            .resource_mut::<Messages<PhotoModalSignal>>()
            .write(signal);
        app.update();
    }

    fn root_display(app: &mut App) -> Display {
        let world = app.world_mut();
        let mut roots = world.query_filtered::<&Node, With<PhotoModalRoot>>();
        roots.single(world).expect("one modal root").display
    }

    #[test]
    fn show_and_hide_signals_drive_the_overlay() {
        let mut app = modal_app();
        app.update();
        assert_eq!(root_display(&mut app), Display::None);

        send(
            &mut app,
            PhotoModalSignal::Show {
                photo: "imgs/math_2.png".to_string(),
                index: 1,
                count: 5,
            },
        );
        assert_eq!(root_display(&mut app), Display::Flex);

        let world = app.world_mut();
        let mut counters = world.query_filtered::<&Text, With<PhotoModalCounter>>();
        assert_eq!(counters.single(world).expect("one counter").0, "2 / 5");

        let mut controls = world.query::<(&ModalControl, &BackgroundColor)>();
        for (control, background) in controls.iter(world) {
            assert_eq!(background.0, BUTTON_COLOR, "{:?}", control);
        }

        send(&mut app, PhotoModalSignal::Hide);
        assert_eq!(root_display(&mut app), Display::None);
    }

    #[test]
    fn first_photo_dims_previous_only() {
        let mut app = modal_app();
        send(
            &mut app,
            PhotoModalSignal::Show {
                photo: "imgs/geo_main.png".to_string(),
                index: 0,
                count: 3,
            },
        );

        let world = app.world_mut();
        let mut controls = world.query::<(&ModalControl, &BackgroundColor)>();
        for (control, background) in controls.iter(world) {
            let expected = match control {
                ModalControl::Previous => BUTTON_DISABLED_COLOR,
                ModalControl::Close | ModalControl::Next => BUTTON_COLOR,
            };
            assert_eq!(background.0, expected, "{:?}", control);
        }
    }

    #[test]
    fn pressed_button_writes_its_command() {
        let mut app = App::new();
        app.add_message::<GalleryCommand>()
            .add_systems(Update, handle_modal_buttons);
        app.world_mut()
            .spawn((Button, Interaction::Pressed, ModalControl::Next));
        app.world_mut()
            .spawn((Button, Interaction::Hovered, ModalControl::Close));
        app.update();

        let messages = app.world().resource::<Messages<GalleryCommand>>();
        let mut cursor = messages.get_cursor();
        let written: Vec<GalleryCommand> = cursor.read(messages).copied().collect();
        assert_eq!(written, [GalleryCommand::Next]);
    }
}
