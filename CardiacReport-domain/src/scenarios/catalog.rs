//! Catalog data: clinical scenarios and their plan texts.

use super::ClinicalScenario;

pub(super) static SCENARIOS: &[ClinicalScenario] = &[
    ClinicalScenario {
        name: "Aritmogene rechter ventrikel cardiomyopathie (ARVC)",
        description: "Diagnostiek, behandeling en ICD-indicaties bij ARVC",
        plan: &["\
Aritmogene rechter ventrikel cardiomyopathie
Genetische counseling en testen bij vermoeden of bevestigde diagnose van ARVC (I).
Geen zware inspanningen bij patiënten met pathogene mutatie en zonder fenotype (IIb)
Betablokker therapie bij patiënten met ARVC (IIb)
Indicatie voor ICD zo aritmogene syncope (IIa), ernstige RV of LV systolische dysfunctie (IIa), matige RV of LV systolische dysfunctie en inducerbaarheid op EFO (IIa).
Bij verdachte symptomen e.g. syncope of palpitaties is een EFO studie te overwegen. (IIb)
Behandeling van SMVT of ICD shocks ondanks BB moet katheter ablatie overwogen worden in gespecialiseerde centra (IIa).
Bij vermoeden van ARVC is een cardiale MR aangewezen (I)."],
    },
    ClinicalScenario {
        name: "Cardiale Amyloidose",
        description: "Diagnostiek en beslisregels voor cardiale amyloidose (AL en ATTR)",
        plan: &["\
Cardiale Amyloidose
Bij vermoeden van een clonale plasma cel aandoening (e.g. multipel myeloom, AL amyloidose, MGUS, Waldenstrom macroglobulinemie):
- Thoracale 99mTc-HMDP bot scintigrafie met SPECT
- Complete celtelling (CBC)
- Serum calcium en creatinine
- Serum electroforese met immunofixatie
- Serum free light chain (FLC assay beter dan urinaire SPEP) - abnormale FLC ratio is hoger risico op progressie
- Serum IgG, IgA, IgM (zo gereduceerd = mogelijk maligne)
- 24 uurs urinecollectie met serum elektroforese en immunofixatie
- Serum albumine, serum LDH, serum beta 2-microglobuline
- Serum transthyretine

Beoordeling scintigrafie en vervolg:
- Geen cardiale uptake en monoklonale proteïnen negatief: kans op cardiale amyloïdose zeer klein; overweeg alternatieve diagnose.
- Graad 1 uptake met suggestieve tekenen/symptomen/beeldvorming: indicatie voor histologische bevestiging.
- Geen cardiale uptake maar een monoklonale proteïnetest abnormaal: AL-amyloïdose uitsluiten; CMR kan betrokkenheid bevestigen.
- Cardiale uptake graad 2 of 3 met negatieve monoklonale eiwitten: ATTR-CA bevestigd; vervolg met genetisch onderzoek (ATTRv vs ATTRwt).
- Cardiale uptake met abnormale monoklonale proteïnetest: overweeg gelijktijdige MGUS, AL-amyloïdose of co-existentie van AL en ATTR.

Behandeling:
- Behandeling van ATTR-gerelateerde cardiale amyloïdose: Tafamidis 61mg 1x/d."],
    },
    ClinicalScenario {
        name: "Hypertrofe cardiomyopathie",
        description: "Evaluatie, genetica en indicaties bij hypertrofe cardiomyopathie (HCM)",
        plan: &["\
Hypertrofe cardiomyopathie
- Evaluatie naar hypertensie, chronische nierziekte, athlete's heart en WT/AL amyloidose.
- Bij WPW, SVT of AV block test voor PRKAG2
- Bij carpal tunnel, neuropathie test voor TTR (hereditaire transthyretin amyloidose)
- Bij ataxie, scoliose, diabetes, visus/spraak/gehoorsproblemen test voor FXN (Friedreich)
- Bij lactaatacidose, epilepsie en beroertes test voor MTTL1 (Mitochondriaal)
- Bij massieve LVH, progressieve conductie problemen, intellectuele achterstand test voor LAMP2 (Danon, X-linked)
- Bij progressieve conductie problemen, nierfalen, tintelingen vingers, hyperhidrosis test voor GLA (Fabry, X-linked) met alpha-galactosidase A activiteit.
- Bij pulmonaal stenose, secundum ASD, klein gestalte, craniofaciale problemen test voor BRAF, KRAS, PTPN11, RAFT1, SOS1 (Noonan syndroom)
- Bij andere test voor ACT1, MYBPC3, MYH7, MYL2, MYL3, TNNI3, TNNT, TPM1.
Een cardiale MRI is aangewezen"],
    },
    ClinicalScenario {
        name: "Nieuw voorkamerfibrilleren",
        description: "Uitgebreide work-up, therapie en ablatie-indicaties bij nieuw voorkamerfibrilleren",
        plan: &["\
- Labo met complete celtelling, nierfunctie, leverenzymen, elektrolieten, fosfaat, calcium, PTH, TSH, T4, HbA1C, glucose en NT-proBNP. (I) Bij hypertensie of ander vermoeden ook aldosterone en renine.
- 12 lead electrocardiogram (I)
- Transthoracale echocardiografie (I)
- Inspanningselectrocardiogram
- Strikte controle van risicofactoren en triggers (obesitas, fysiek inactiviteit, roken, alcohol, diabetes en hypertensie). (I)
- Het is redelijk om bij alle patiënten te screenen naar obstructief slaapapneu. (IIb)
- Optimalisatie van bloeddrukcontrole met target 120-129/70-79 mmHg om progressie van AF en cardiovasculaire events te verminderen. (I-B)
- Gewichtsverlies is aangewezen in patiënten met overgewicht (BMI >25kg/m²) of obesitas (BMI >30kg/m²).
- Start SGLT-2 inhibitor bij patiënten met hartfalen ongeacht de ejectiefractie (IA)
- Reductie van alcohol naar minder dan 30 gram alcohol per week.

Additief:
- CT coronairen of coronarografie bij vermoeden coronair lijden, helpt ook voor opstart flecaïnide.
- Zo jonge leeftijd (voor 30 jaar) best een EFO voor re-entrant supraventriculaire tachyaritmiën te detecteren en ableren. (IIb)
- Zo jonge leeftijd (voor 45 jaar) zonder duidelijke risicofactoren, best verwijzing voor genetica. (IIb)
- Ambulante ECG monitoring om burden en ventriculair antwoord te evalueren.
- Cardiale MRI bij vermoeden van atriale of ventriculaire cardiomyopathie."],
    },
    ClinicalScenario {
        name: "Atriumflutter",
        description: "Beleid bij atriumflutter: anticoagulatie, cardioversie en ablatie-overwegingen",
        plan: &["\
Atriumflutter
Atriumflutter zonder concomitante aanwezigheid van atriumfibrillatie moet overwogen worden voor anticoagulatie maar de drempel is onduidelijk (IIa-C).
Atriale pacing is aangewezen voor terminatie van atriale flutter in aanwezigheid van atriale lead (I-B).
Elektrische cardioversie is aangewezen met lage energie <100 J.
Katheterablatie moet overwogen worden na een eerste episode van symptomatische typische atriumflutter (IIa-B). Zo geen duidelijk reversibele oorzaak is er een zeer hoge kans op recidief. Bij katheterablatie is er 95% kans op volledig curatief succes zonder recidief.

Katheterablatie is aanbevolen bij symptomatische, herhaalde episodes van CTI-afhankelijke atriumflutter (I-A).
Katheterablatie is aanbevolen bij symptomatische, herhaalde episodes van CTI-onafhankelijke atriumflutter in ervaren centrum (I-B).
Katheterablatie is aanbevolen bij persistente atriumflutter voor tachycardiomyopathie (I-B)"],
    },
    ClinicalScenario {
        name: "Chronisch hartfalen HFrEF",
        description: "Klassiek pharmacologisch beleid en doelstellingen voor chronisch hartfalen met verminderde ejectiefractie (HFrEF)",
        plan: &["\
Chronisch hartfalen HFrEF

Beta blocker
Bisoprolol 2.5mg 1x/d - target 10mg 1x/d
Carvedilol 6.25mg 2x/d - target 12.5mg 2x/d
Dosis verdubbelen elke 2 weken.
Mineralocorticoid Receptor Antagonists (MRA)
Aldactone (Spironolactone) 25mg 1x/d - target 50mg 1x/d
Controle bloedname met nierfunctie en elektrolieten na 1 en 4 weken. Dosis verdubbelen na 4 weken.
Angiotensin Receptor-Neprilysin Inhibitor (ARNI)
Entresto (Valsartan/Sacubitril) 49/51mg 2x/d - target 97/103mg 2x/d
Controle bloedname met nierfunctie en elektrolieten na 2 weken. Dosis verdubbelen elke 2 weken.
If-current Inhibitor
Procoralan (Ivabradine) 5mg 2x/d - target 7.5mg 2x/d.
Sodium-Glucose Cotransporter 2 inhibitors (SGLT-2 inh)
Forxiga 10mg 1x/d."],
    },
    ClinicalScenario {
        name: "Dyspnee workup",
        description: "Uitgebreide dyspneu-workup",
        plan: &["\
Labo met complete celtelling, nierfunctie, elektrolyten, CK, TSH, T4, ijzerstatus, HbA1C, glucose en NT-proBNP.
CT coronairen of coronarografie zo vermoeden van coronair lijden.
Holter monitoring bij vermoeden aritmie.
RX thorax F/P of low dose CT thorax
Volledige longfunctie (spirometrie met reversibiliteit, flow-volume loop, longvolumes, diffusiecapaciteit en bodybox luchtwegweerstand) + FeNO bij vermoeden astma.
Electrocardiogram (ECG)
Transthoracale echocardiografie (TTE) - (HFpEF/HFrEF, pericardiale ziekten, pulmonale hypertensie)
Fietsproef
Ligfiets echocardiografie (indicatie bij dyspnee van onbekende origine, vermoeden myocardischemie, mitralisklepregurgitatie, pulmonale hypertensie, low gradient aorta stenose, LVOT obstructie)
Cardiopulmonale exercise testing (CPET) te plannen zo bovenstaande negatief.
Rechter hartcatheterisatie (RHC) bij vermoeden pulmonale hypertensie. Diagnose zo mPAP >20 mmHg.
V/Q scan bij voorgeschiedenis (CTEPH) of vermoeden longembolen.
Cardiale MRI bij vermoeden cardiomyopathie
Botscan zo vermoeden amyloïdose"],
    },
    ClinicalScenario {
        name: "Syncope work-up",
        description: "Diagnostisch stappenplan bij syncope (bewustzijnsverlies)",
        plan: &[
            "Anamnese: prodromale symptomen, triggers (opstaan, mictie, hoesten), duur, herstel",
            "Heteroanamnese: convulsies, tongbeet, incontinentie (DD epilepsie)",
            "Lichamelijk onderzoek: orthostatische hypotensie (RR liggend/staand), cardiaal/neurologisch",
            "ECG: geleidingsstoornissen (AV-blok), aritmieën (QTc, Brugada, pre-excitatie)",
            "Bloedonderzoek: Hb, glucose, elektrolyten",
            "Hoog-risico kenmerken (opname indicatie): inspanningsgebonden syncope, hartfalen/structureel hartlijden, familie-anamnese plotse dood <40 jaar, ECG-afwijkingen (QTc >460ms, Brugada, ARVD)",
            "Aanvullend (afhankelijk van verdenking): echocardiografie, Holter / event recorder, tilt-table test, EFO, neurologisch consult",
            "Behandeling: oorzaakspecifiek (PM bij bradycardie, ICD bij maligne aritmie, vochtinname/compressiekousen bij orthostatisme)",
        ],
    },
    ClinicalScenario {
        name: "Device indicaties",
        description: "Indicaties en overwegingen voor pacemaker, ICD, CRT en tijdelijke pacing",
        plan: &["\
Bradycardie indicatie
Etiologische oppuntstelling (TSH, T4, lyme titer, digitalis spiegel, calcium, kalium, pH) (Klasse IA)
Bij nachtelijke bradycardie of AV block best ook slaapstudie (klasse IC)
Bij infrequent syncope (e.g. < 1 x per maand) implantatie van ILR (IA)
Bij vroege onset (<50 jaar) of familiale voorgeschiedenis, dan genetische test.

Sinusknoopdysfunctie
Zo symptomen ten gevolge van sinusknoop dysfunctie (I-A)
Zo noodzakelijk in de context van brady-tachy syndroom voor farmacologische behandeling van tachycardie, tenzij ablatie mogelijk is (IB)
Niet zo transiënte oorzaak of asymptomatisch (IIIC)

Atrioventriculaire conductiedysfunctie
Bij sinusaal ritme met permanent of paroxysmaal 3de graads, 2de graads type 2, infranodaal 2:1 of hooggradig AV block ongeacht symptomen (IC)
Bij onverklaarde syncope met bifasculair block, op voorwaarde dat HV interval >70ms is (IB)
Bij alternating bundeltakblock ongeacht symptomen (IC)
Zo AVB nog aanwezig meer dan 5 dagen na infarct of cardiale chirurgie. (IC)
Volledig of hooggradig AVB langer dan 24-48u na TAVI (IB)
Bij voorkeur steeds conduction system pacing (CSP) - LBBAP.

Reflex syncope
Spontane gedocumenteerde symptomatische asystole pauze > 3 seconden of asymptomatische pauze > 6 seconden door sinusarrest of AV block. (IA)
Cardio-inhibitoire carotid sinus syndrome (IA)
Asystole syncope tijdens tilt testing (IA)

CRT
Bij patiënten in sinus ritme met LVEF < 35% met QRSd > 150ms, LBBB morfologie ondanks optimale medicamenteuze therapie (IA)"],
    },
    ClinicalScenario {
        name: "ICD RIZIV Criteria",
        description: "RIZIV terugbetalingscriteria en indicaties voor implantatie van een hartdefibrillator (ICD)",
        plan: &["\
ICD RIZIV Criteria
1. Hartstilstand (datum te vermelden op de klinische samenvatting alsook of er sprake is van \"out of hospital\") ten gevolge van ventrikelfibrillatie of -tachycardie, niet te wijten aan een acuut myocardinfarct noch aan een voorbijgaande of reversibele oorzaak (elektrolietenstoornis, geneesmiddelen, trauma).

2. Plotse syncope, die na uitsluiting van andere oorzaken vermoedelijk van aritmogene oorsprong is, zonder gedocumenteerde tachyaritmie: bij een patiënt met gecorrigeerd congenitaal ventriculair hartlijden en induceerbare sustained ventriculaire aritmie tijdens elektrofysiologisch onderzoek.

3. Spontaan opgetreden sustained ventrikeltachycardie (> 30 seconden en > 100/min of, indien korter, met noodzaak tot cardioversie) met syncope of presyncope omwille van hemodynamische weerslag:
- 3.1. met onderliggend structureel hartlijden
- 3.2. zonder onderliggend structureel hartlijden, maar niet geschikt voor andere therapie.

4. Plotse syncope vermoedelijk van aritmogene oorsprong zonder gedocumenteerde tachyaritmie:
- 4.1. bij ischemische cardiomyopathie zonder revasculariseerbare ischemie, meer dan 72 u na hartinfarct, LVEF ≤ 50%, en induceerbare sustained monomorfe ventriculaire tachycardie tijdens elektrofysiologisch onderzoek;
- 4.2. bij niet-ischemische gedilateerde cardiomyopathie en ejectiefractie < 35% met syncope zonder gedocumenteerde ventriculaire tachyaritmie."],
    },
    ClinicalScenario {
        name: "Brugada syndroom (BrS)",
        description: "Diagnose, genetica, provocatieprotocol en behandeling van Brugada syndroom",
        plan: &["\
Brugada syndroom (BrS)
Diagnose:
- Type-1 Brugada ECG-patroon: coved/ST-elevatie met T-golfinversie in ten minste één rechter precordiale afleiding (V1 of V2) gepositioneerd in 2e-4e intercostale ruimte, spontaan of na farmacologische provocatie.

Genetica:
- Genetische testing voor het SCN5A-gen is aangewezen bij probands met klinische verdenking op BrS (I-C).
- Autosomaal dominante overerving; SCN5A verklaart ~20-30% van klinische gevallen.

Ajmaline (sodium-channel blocker) protocol:
- Contra-indicaties: zwangerschap, 2e/3e graads AV-blok, hypertrofe cardiomyopathie, hartfalen.
- Patiënt nuchter; externe defibrillator aanwezig; atropine en isoprenaline standby.
- Dosis: ajmaline 1 mg/kg IV, max 100 mg, in stapjes met ECG-monitoring elke minuut; registreer V1/V2 hoog geplaatst.
- Stopcriteria: optreden van coved-type type-1 ST-elevatie (>2 mm), polymorfe VES/VT, sinusarrest, 2°/3° AV-blok, QRS-verlenging >30% of significante hypotensie.

Behandeling en follow-up:
- Vermijd geneesmiddelen die ST-elevatie in rechter precordialen kunnen verergeren (brugadadrugs.org); vermijd excessief alcohol; behandel koorts snel.
- Jaarlijkse cardiologische controle; instructies aan patiënt om onmiddellijk presyncope/syncope te melden.
- ICD-implantatie is geïndiceerd bij SCA-survivors of gedocumenteerde sustained VT; niet geïndiceerd in asymptomatische patiënten louter op basis van familieanamnese.
- Ablatie kan overwogen worden bij electrical storm of herhaalde geschikte ICD-shocks."],
    },
    ClinicalScenario {
        name: "LQTS (Long QT syndroom)",
        description: "Diagnose, genetica en behandeling van congenitaal en verworven lang QT-syndroom",
        plan: &["\
LQTS (Long QT syndroom)
Diagnose:
- LQTS wordt vermoed bij herhaalde QTc > 480 ms zonder symptomen of bij LQTS-diagnostische score > 3 (I-C).
- Overweeg LQTS bij herhaalde QTc tussen 460-480 ms bij aritmogene syncope zonder secundaire oorzaak (IIa).

Genetica:
- Genetische analyse (incl. KCNQ1, KCNH2, SCN5A) is aangewezen bij bewezen LQTS (I-C) en aanbevolen bij sterke klinische verdenking.

Behandeling:
- Vermijd QT-verlengende medicatie (www.qtdrugs.org) en corrigeer electrolyten.
- Niet-cardioselectieve bètablokkers zijn geïndiceerd bij gedocumenteerd verlengd QT (I-B).
- Bij LQT3-mutatie overweeg mexiletine (I-C).
- Indicatie voor ICD: cardiac arrest (I-B) of symptomatische aritmogene syncope/hemodynamisch niet-getolereerde ventriculaire aritmie (I-B).
- Cascade-genetica is aanbevolen bij positieve vondst."],
    },
    ClinicalScenario {
        name: "Chronisch coronair syndroom",
        description: "Diagnostiek, risicostratificatie en revascularisatie-indicaties bij chronisch coronair syndroom (CCS)",
        plan: &["\
Chronisch coronair syndroom

Thoracale pijn uitgelokt door emotionele stress, dyspnee of duizelingen bij inspanning, pijn in de arm, kaak of nek moeten overwogen worden als potentiële angor equivalenten (IIa-B)
Een 12-lead ECG is noodzakelijk in alle patiënten met thoracale pijn (I-C)
Een transthoracale echocardiografie is aangewezen (I-B)
Inspanningselectrocardiogram (I-C)
RX thorax ter evaluatie van longziekten en andere thoracale oorzaken van thoracale pijn (IIa)
Holter zo vermoeden van aritmie of vasospastische angor. (IIa)
Labo met cytologie, nierfunctie, ionogram, volledig lipiden profiel incl. lipoproteïne (a), schildklierbilan, Hs-CRP, fibrinogeen en HbA1C. (I-A)
Bij very low pre-test probability (<5%) is geen verdere diagnostische test noodzakelijk
Bij low or moderate pre-test probability (5%-50%) is een CCTA aanbevolen om obstructief CAD te evalueren en risico op MACE (I-A)
Bij moderate or high pre-test probability (15%-85%) is stress echocardiografie aangewezen om myocardiale ischemie aan te tonen. (I-B)
Bij hoge pre-test probability (>85%) is coronarografie aangewezen zo ernstige symptomen refractair aan medicatie. (IC)

Revascularisatie indicaties
Hoofdstam: revascularisatie is aangewezen bij functioneel significant hoofdstamletsel met ≥50% stenose om overleving te verbeteren (I-A). Zo laag chirurgisch risico door middel van CABG (I-A). Zo weinig complex letsel (SYNTAX <22) kan PCI gebruikt worden (I-A)
Meertakslijden + diabetes: CABG heeft sterke voorkeur om overleving te verbeteren (I-A)."],
    },
    ClinicalScenario {
        name: "Aorta Aneurysma opvolging",
        description: "Richtlijnen voor follow-up en beeldvorming van thoracale aorta aneurysma",
        plan: &["\
Aorta Aneurysma opvolging

Zo 30-40mm dan elke 3 jaar TTE.
Zo 40-44mm dan baseline CT of MR aorta en controle TTE in 1 jaar, zo toename >3mm/jaar dan bevestigen met CT of MR aorta en zo bevestigd elke 6 maanden TTE.
Zo 40-44mm dan baseline CT of MR aorta en controle TTE in 1 jaar, zo toename <3mm/jaar dan controle TTE elke 2 jaar.
Zo 45-49mm dan baseline CT of MR aorta en controle TTE elke 6 maanden.
Zo 50-52mm dan baseline CT of MR aorta, zo hoog risico eigenschappen (familiale voorgeschiedenis van acute aorta events, ongecontroleerde hypertensie, leeftijd <50 jaar) dan kan chirurgie overwogen worden (IIb) anders elke 6 maanden nieuwe beeldvorming.
Zo 50-54mm dan baseline CT of MR aorta, zo wortel fenotype en bicuspiede klep dan chirurgie (I)
Zo 50-54mm dan baseline CT of MR aorta, zo wortel fenotype en tricuspiede klep kan chirurgie overwogen worden (IIb).
Zo >55mm dan chirurgie (I)

Zo aorta aneurysma of thoracale aorta dissectie met risicofactoren voor HTAD is genetische testing aangewezen. (<60 jaar, geen klassieke risicofactoren, onverklaard plots overlijden familiaal, intracraniële of perifere aneurysmas, familiale TAD, syndromale kenmerken van Marfan, Loeys-Dietz of Ehlers-Danlos)."],
    },
    ClinicalScenario {
        name: "Primaire mitralis regurgitatie",
        description: "Indicaties voor mitralisklepchirurgie en aanpak bij primaire mitralisklepregurgitatie",
        plan: &["\
Primaire mitralis regurgitatie

Mitralisklepchirurgie is aangewezen bij ernstige primaire mitralisklepregurgitatie en:
- Symptomen - (I-B)
- LV dysfunctie met LVEF <=60% of LVESD >40 mm of LVESDI >=20mm/m² - (I-B)
- Pulmonale hypertensie met sPAP in rust >50 mmHg - (IIa-B)
- LA dilatatie (LAVI >60 ml/m² of LA diam >=55mm) - (IIa-B)
- Voorkamerfibrillatie - (IIa-B)
Chirurgisch klepherstel heeft de voorkeur als chirurgische techniek (I-B).
Minimaal invasieve klepchirurgie kan overwogen worden om hospitalisatieduur te verkorten en snelheid van herstel te bevorderen (IIb).
- TEER bij symptomatische patiënten met ernstig PMR, hoog chirurgisch risico en echocardiografisch in aanmerking komen."],
    },
];
