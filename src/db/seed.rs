// Seed catalogue: 50 questions per difficulty tier, inserted once on an
// empty database. Content is fixed so seeding is deterministic.

use color_eyre::{eyre::OptionExt, Result};
use libsql::params;

use crate::names;

pub async fn seed_questions(conn: &libsql::Connection) -> Result<()> {
    let count = conn
        .query("SELECT COUNT(*) FROM questions", ())
        .await?
        .next()
        .await?
        .ok_or_eyre("could not count questions")?
        .get::<i64>(0)?;
    if count > 0 {
        return Ok(());
    }

    let tiers: [(i64, &[&str; 50]); 3] = [
        (1, &TIER_1_QUESTIONS),
        (2, &TIER_2_QUESTIONS),
        (3, &TIER_3_QUESTIONS),
    ];

    let mut seeded = 0;
    for (tier, texts) in tiers {
        let points = names::points_for_tier(tier).ok_or_eyre("unknown tier in seed table")?;
        for text in texts.iter() {
            conn.execute(
                "INSERT INTO questions (difficulty, text, points) VALUES (?, ?, ?)",
                params![tier, *text, points],
            )
            .await?;
            seeded += 1;
        }
    }

    tracing::info!("seeded {seeded} questions");
    Ok(())
}

const TIER_1_QUESTIONS: [&str; 50] = [
    "Wat is je grootste fantasie?",
    "Ben je ooit betrappt terwijl je iets deed wat je niet moest doen?",
    "Wie vind je het aantrekkelijkst in deze groep?",
    "Heb je ooit voor iemand gelogen om indruk te maken?",
    "Wat zou je doen als niemand het zou weten?",
    "Hoe oud was je bij je eerste kus?",
    "Ben je ooit onverwacht aangetrokken tot iemand?",
    "Wat is je ergste datingervaring?",
    "Heb je ooit gespiedd op iemand?",
    "Wat voor kleur ondergoed draag je nu?",
    "Heb je ooit een flessenpost geschreven met een romantische boodschap?",
    "Wat is het raarste wat je ooit online hebt gezocht?",
    "Ben je ooit jaloers geweest op een vriend?",
    "Wat zou je doen als je anoniem kon zijn voor een dag?",
    "Heb je ooit iemands geheim geroddeld?",
    "Welk lichaamsdeel vind je het mooiste aan jezelf?",
    "Ben je ooit verliefd geweest op iemand die je niet kon krijgen?",
    "Hoe lang kan je oogcontact houden zonder gek te voelen?",
    "Heb je ooit naakt geslaapwandeld?",
    "Wat is het eerste wat je opvalt aan iemand?",
    "Ben je ooit stiekem naar iemand toe geslopen?",
    "Wat is je voornaamste schoonheid?",
    "Hoe oud wil je zijn als je nooit ouder wordt?",
    "Heb je ooit iemand gekust die je dacht niet aan te vallen?",
    "Wat is het vetste geheim dat je niemand hebt verteld?",
    "Ben je ooit in pyjama naar buiten gegaan?",
    "Heb je ooit jezelf betrappt op staren naar iemand?",
    "Wat zou je niet voor geld doen?",
    "Ben je ooit rood geworden om iets grappigs?",
    "Hoe lang duurt het voordat je verliefd wordt?",
    "Wat is je minst aantrekkelijke eigenschap?",
    "Heb je ooit iets gestolen?",
    "Ben je ooit dronken teksten gaan sturen?",
    "Wat vind je aantrekkelijk aan het andere geslacht?",
    "Heb je ooit je voordeur half naakt opengemaakt?",
    "Wat is het ergtste compliment dat je hebt gekregen?",
    "Ben je ooit meegenomen naar de supermarkt in pyjama?",
    "Hoe voelt het als iemand flirt met jou?",
    "Heb je ooit achter iemand aan gerend in het openbaar?",
    "Wat is het diepste geheim van iemand die je kent?",
    "Ben je ooit 'ongelukig' tegen iemand aangebotst?",
    "Hoe lang kun je verslagen voelen?",
    "Heb je ooit iemands naam uitgekregen?",
    "Wat is het eerste wat je doet als je vrijdag hebt?",
    "Ben je ooit naakt in zwemwater geweest?",
    "Wat dacht je over seks op je 12e?",
    "Heb je ooit voor het eerst gekust?",
    "Wat is je schaamteloze plezier?",
    "Ben je ooit in de spiegel naar jezelf blijven kijken?",
    "Hoe reageert je lichaam op spanning?",
];

const TIER_2_QUESTIONS: [&str; 50] = [
    "Geef de persoon links van je een massage",
    "Flirt 30 seconden intens met iemand aan tafel",
    "Maak oogcontact met iemand zonder te glimlachen voor 1 minuut",
    "Fluister je meest pikante gedachte in iemandsoor",
    "Dans één lied op een sensuelemmanier",
    "Maak het meest verleidelijke gezicht dat je kan",
    "Geef iemand een compliment over hun kont",
    "Zeg iets sensuëels over de persoon rechts van je",
    "Bind iemands ogen dicht met een servet",
    "Voer iemand blind te eten",
    "Doe je lippen stift af en geef iemand een zoen op zijn wang",
    "Doe een dansje in de stijl van een buikdanseres",
    "Kukel je heupen terwijl je iemand aankijkt",
    "Geef jezelf een compliment op een verleidelijke manier",
    "Verbied iemand naar je te kijken terwijl jij staart",
    "Maak een suggestief grapje over de persoon naast je",
    "Streel langzaam je eigen nek en hals",
    "Zeg drie dingen die je aantrekkelijk vindt aan jezelf",
    "Laat iemand raden wat je onder je kleren draagt",
    "Dans totdat iemand je aanraakt",
    "Speel een scène van twee minnaars",
    "Maak een foto van jezelf in je beste look",
    "Vertel de groep je meest embarrassante moment met het andere geslacht",
    "Leg je hoofd op iemands schoot",
    "Voer iemand wat te eten met je handen",
    "Zeg iets smerig in het oor van de persoon links",
    "Doe push-ups terwijl iemand toekijkt",
    "Toon je binnenkant pols aan iemand en leg uit wat je voelt",
    "Maak jezelf aantrekkelijk en pose als een model",
    "Vertel een verhaal in het donker met je hand op iemands been",
    "Lach op jouw verleidelijkste manier",
    "Zeg hoeveel keer je jezelf deze week hebt 'gesteld'",
    "Dans met je rug naar iemand toe",
    "Speel kat en muis met iemand in de kamer",
    "Zit op iemands schoot en fluister in hun oor",
    "Teken iets pikant op iemands arm",
    "Voer iemand aardbeien of ander voedsel sensueel",
    "Zeg wat je zou doen als je alleen met je crush zou zijn",
    "Leg je benen op iemands schoot",
    "Maak de langste oogcontact zonder te lachen",
    "Vertel iemand waarom jij sexy bent",
    "Dans als een stripper op muziek",
    "Geef jezelf een knuffel en zeg dat je jezelf leuk vindt",
    "Laat iemand je haar strelen",
    "Zeg iets pikant terwijl je je lippen bijt",
    "Toon de 'zonde' in jouw blik",
    "Sla langzaam je been over die van iemand anders",
    "Vraag iemand wat hun favoriete deel van jou is",
    "Dans sensuel met iemand van hetzelfde geslacht",
    "Beschrijf je droomdata in detail",
];

const TIER_3_QUESTIONS: [&str; 50] = [
    "Zoen de persoon rechts van je op de mond",
    "Zoen iemand voor 10 seconden",
    "Geef iemand een tonguekus",
    "Trek je shirt uit voor een foto",
    "Laat je onderbroek zien aan iemand",
    "Zit op iemands schoot en wieg heen en weer",
    "Maak de wildste geluid die je kan tijdens een 'moment'",
    "Streel je eigen lichaam sensuel terwijl je iemand aankijkt",
    "Zeg je wildste fantasie hardop op",
    "Trek je broek een beetje naar beneden",
    "Lick je eigen vinger en wrijf het over de lip van iemand",
    "Geef iemand een lik langs zijn nek",
    "Zit in iemands schoot en wrijf tegen hem",
    "Flirt een minuut lang zeer suggestief met iemand",
    "Zeg hoe lang je het in bed kunt volhouden",
    "Trek je bh uit onder je kleding",
    "Taste jezelf voor de groep",
    "Zeg een nummer van keren dat je masturbeerde deze week",
    "Zoen degene die je graag zou willen zoenen",
    "Geef iemand een lap dance",
    "Klap je eigen billen",
    "Maak seksuele geluiden terwijl je iemand aankijkt",
    "Trek je korset strakker en pose sensuel",
    "Zeg wat je zou doen met je crush in een leeg huis",
    "Zit schrijlings op iemands been",
    "Neem een drinken en geef het aan iemand via je mond",
    "Zeg je meest schaamteloze wens",
    "Imiteer het geluid van twee mensen die elkaar kussen",
    "Raak jezelf aan waar jij jezelf zou willen aanraken",
    "Zoen iemand achter zijn oor",
    "Trek je knie omhoog naar je borst in een sensuelepositie",
    "Zeg tegen iemand wat je zou willen doen",
    "Speel tonguekus met iemand",
    "Maak langzaam je bovenkant los",
    "Zeg hoeveel keer je deze week an het andere geslacht hebt gedacht",
    "Geef iemand een lik op zijn kaak",
    "Zit naast iemand en haak je been in die van hem",
    "Uitzendingen een seksueel voicemail-bericht",
    "Trek je kruis dicht tegen iemand aan",
    "Zeg de meest pikante ding die iemand je ooit heeft gezegd",
    "Zoen iemand op zijn hals",
    "Maak jezelf aan terwijl je iemand aankijkt",
    "Zit op iemands schoot en dans",
    "Zeg hoeveel tijd je in bad besteedt",
    "Speel met iemands haar op een suggestieve manier",
    "Zeg wat je zou doen als niemand het zou weten",
    "Geef jezelf twee zoenen in de spiegel",
    "Beschrijf hoe je je voelt in lingerie",
    "Zeg wie je nu meteen zou zoenen als je moest kiezen",
    "Geef iemand twee minuten lang een schoudermassage met je ogen dicht",
];

