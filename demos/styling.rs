use stylemod::{lens, Mod, Modify};

#[derive(Debug, Clone, Default)]
struct Style {
    background: &'static str,
    foreground: &'static str,
    corner_radius: f32,
    border_width: f32,
}

#[derive(Debug, Clone)]
struct Button {
    title: String,
    style: Style,
}

#[derive(Debug, Clone)]
struct Toolbar {
    buttons: Vec<Button>,
}

fn rounded(radius: f32) -> Mod<Style> {
    Mod::new(move |s: &mut Style| s.corner_radius = radius)
}

fn bordered(width: f32) -> Mod<Style> {
    Mod::new(move |s: &mut Style| s.border_width = width)
}

fn filled(background: &'static str, foreground: &'static str) -> Mod<Style> {
    Mod::new(move |s: &mut Style| {
        s.background = background;
        s.foreground = foreground;
    })
}

fn main() {
    // small fragments composed into a reusable base style
    let base = rounded(8.0) + bordered(1.0);
    let primary = base.appending(filled("teal", "white"));

    let mut ok = Button {
        title: "OK".into(),
        style: Style::default(),
    };
    ok.modify(&primary.clone().pullback(lens!(Button, style)));
    println!("{ok:?}");

    // the same fragment lifted over every button of a toolbar
    let toolbar = Toolbar {
        buttons: vec![
            Button {
                title: "Cut".into(),
                style: Style::default(),
            },
            Button {
                title: "Paste".into(),
                style: Style::default(),
            },
        ],
    };
    let styled = toolbar.modified(
        &primary
            .pullback(lens!(Button, style))
            .for_each(lens!(Toolbar, buttons)),
    );
    println!("{styled:#?}");
}
